use page_translator::App;

fn main() {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Page Translator starting...");

    yew::Renderer::<App>::new().render();
}
