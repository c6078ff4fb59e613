use yew::prelude::*;

use crate::components::animation::{ambient_css, entry_css, FadeIn};
use crate::components::theme_toggle::ThemeToggle;
use crate::content;
use crate::theme::{Section, ThemeHandle};

#[hook]
fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>().expect("theme context not provided")
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    let theme = use_theme();
    html! {
        <header class={Section::Hero.class(*theme)}>
            <FadeIn>
                <span class="hero-shield"><i class="fas fa-shield-halved"></i></span>
                <h1 class="hero-title">
                    {content::HERO_TITLE_TOP}<br/>{content::HERO_TITLE_BOTTOM}
                </h1>
                <p class="hero-subtitle">{content::HERO_SUBTITLE}</p>
                <div class="hero-badges">
                    {
                        content::HERO_BADGES.iter().map(|badge| html! {
                            <span class={format!("hero-badge {}", theme.name())}>
                                <i class="fas fa-check"></i>{*badge}
                            </span>
                        }).collect::<Html>()
                    }
                </div>
                <button class="hero-cta">{content::HERO_CTA}</button>
            </FadeIn>
        </header>
    }
}

#[function_component(HowItWorksSection)]
fn how_it_works_section() -> Html {
    let theme = use_theme();
    html! {
        <section class={Section::HowItWorks.class(*theme)}>
            <h2>{"How It Works"}</h2>
            <div class="step-row">
                {
                    content::STEPS.iter().enumerate().map(|(index, step)| html! {
                        <FadeIn index={index as u32} class="step">
                            <i class={step.icon}></i>
                            <p>{step.label}</p>
                        </FadeIn>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(FeaturesSection)]
fn features_section() -> Html {
    let theme = use_theme();
    html! {
        <section class={Section::Features.class(*theme)}>
            <h2>{"Key Features"}</h2>
            <div class="feature-grid">
                {
                    content::FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <FadeIn index={index as u32} class={Classes::from(format!("feature-card {}", theme.name()))}>
                            <i class={feature.icon}></i>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </FadeIn>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(GallerySection)]
fn gallery_section() -> Html {
    let theme = use_theme();
    html! {
        <section class={Section::Gallery.class(*theme)}>
            <h2>{"See It In Action"}</h2>
            <div class="gallery-grid">
                {
                    content::SCREENSHOTS.iter().map(|shot| html! {
                        <div class="gallery-item">
                            <img src={shot.url} alt={shot.alt} loading="lazy" />
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(TechStackSection)]
fn tech_stack_section() -> Html {
    let theme = use_theme();
    html! {
        <section class={Section::TechStack.class(*theme)}>
            <h2>{"Powered By"}</h2>
            <div class="tech-row">
                {
                    content::TECH_STACK.iter().enumerate().map(|(index, tech)| html! {
                        <FadeIn index={index as u32} class="tech-item">
                            <i class={tech.icon}></i>
                            <p>{tech.name}</p>
                        </FadeIn>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let theme = use_theme();
    html! {
        <div class={format!("landing-page {}", theme.name())}>
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <ThemeToggle />
            <HeroSection />
            <HowItWorksSection />
            <FeaturesSection />
            <GallerySection />
            <TechStackSection />
            <style>{entry_css()}</style>
            <style>{ambient_css()}</style>
            <style>{LANDING_CSS}</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }
    body {
        font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    }
    .landing-page {
        min-height: 100vh;
        transition: background-color 0.3s ease, color 0.3s ease;
    }
    .landing-page.light {
        background: #f9fafb;
        color: #111827;
    }
    .landing-page.dark {
        background: #111827;
        color: #fff;
    }
    .theme-toggle {
        position: fixed;
        top: 1rem;
        right: 1rem;
        z-index: 10;
        width: 3rem;
        height: 3rem;
        border: none;
        border-radius: 50%;
        cursor: pointer;
        font-size: 1.2rem;
        backdrop-filter: blur(4px);
        transition: transform 0.2s ease;
    }
    .theme-toggle.light {
        background: rgba(17, 24, 39, 0.08);
        color: #111827;
    }
    .theme-toggle.dark {
        background: rgba(255, 255, 255, 0.12);
        color: #fff;
    }
    .theme-toggle:hover {
        transform: scale(1.1);
    }
    section, header {
        padding: 5rem 2rem;
        text-align: center;
    }
    section h2 {
        font-size: 2rem;
        font-weight: 700;
        margin-bottom: 4rem;
    }
    .alt-surface.light {
        background: #fff;
    }
    .alt-surface.dark {
        background: #1f2937;
    }
    .hero-section {
        padding-top: 7rem;
        padding-bottom: 8rem;
    }
    .hero-shield {
        font-size: 4rem;
        color: #3b82f6;
        margin-bottom: 2rem;
    }
    .hero-title {
        font-size: 3rem;
        font-weight: 700;
        line-height: 1.2;
        margin-bottom: 1.5rem;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        opacity: 0.8;
        margin-bottom: 1.5rem;
    }
    .hero-badges {
        display: flex;
        justify-content: center;
        gap: 0.75rem;
        margin-bottom: 2rem;
        flex-wrap: wrap;
    }
    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.4rem;
        padding: 0.35rem 0.9rem;
        border-radius: 999px;
        font-size: 0.85rem;
    }
    .hero-badge i {
        color: #3b82f6;
    }
    .hero-badge.light {
        background: rgba(59, 130, 246, 0.1);
    }
    .hero-badge.dark {
        background: rgba(59, 130, 246, 0.2);
    }
    .hero-cta {
        background: #3b82f6;
        color: #fff;
        border: none;
        padding: 1rem 2rem;
        border-radius: 999px;
        font-size: 1.1rem;
        font-weight: 600;
        cursor: pointer;
        transition: background 0.2s ease, transform 0.15s ease;
    }
    .hero-cta:hover {
        background: #2563eb;
        transform: scale(1.05);
    }
    .hero-cta:active {
        transform: scale(0.95);
    }
    .step-row {
        display: flex;
        justify-content: center;
        gap: 3rem;
        flex-wrap: wrap;
    }
    .step i {
        font-size: 2.5rem;
        color: #3b82f6;
        margin-bottom: 1rem;
        display: block;
    }
    .step p {
        font-size: 0.9rem;
        opacity: 0.8;
    }
    .feature-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 2rem;
        max-width: 1100px;
        margin: 0 auto;
    }
    .feature-card {
        padding: 1.5rem;
        border-radius: 12px;
        text-align: left;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
    }
    .feature-card.light {
        background: #fff;
    }
    .feature-card.dark {
        background: #1f2937;
    }
    .feature-card i {
        font-size: 2rem;
        color: #3b82f6;
        margin-bottom: 1rem;
        display: block;
    }
    .feature-card h3 {
        font-size: 1.2rem;
        margin-bottom: 0.5rem;
    }
    .feature-card p {
        opacity: 0.8;
    }
    .gallery-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
        gap: 2rem;
        max-width: 1100px;
        margin: 0 auto;
    }
    .gallery-item {
        border-radius: 12px;
        overflow: hidden;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
        transition: transform 0.2s ease;
    }
    .gallery-item:hover {
        transform: scale(1.02);
    }
    .gallery-item img {
        width: 100%;
        height: 400px;
        object-fit: cover;
        display: block;
    }
    .tech-row {
        display: flex;
        justify-content: center;
        gap: 3rem;
        flex-wrap: wrap;
    }
    .tech-item i {
        font-size: 2.5rem;
        color: #3b82f6;
        margin-bottom: 0.75rem;
        display: block;
    }
    .tech-item p {
        font-weight: 600;
    }
    @media (max-width: 768px) {
        .hero-title {
            font-size: 2rem;
        }
        section, header {
            padding: 3rem 1rem;
        }
        .gallery-item img {
            height: 260px;
        }
    }
"#;
