use clipsafe_landing::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("mounting landing page");
    yew::Renderer::<App>::new().render();
}
