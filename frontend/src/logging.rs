use log::Level;

fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

pub fn init_logging() {
    wasm_logger::init(wasm_logger::Config::new(max_level()));
}
