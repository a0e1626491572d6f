use input_text_factory::client::ClientInputText;

fn main() {
    env_logger::init();

    let client = ClientInputText::new();
    let input_text_simple = client.main_simple();
    let input_text_multi_select = client.main_multi_select();
    log::info!("simple: {input_text_simple:?}");
    log::info!("multi select: {input_text_multi_select:?}");
}
