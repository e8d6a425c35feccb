use mechtools::Examples::mechtools_examples::mechtools_examples;
use mechtools::Utils::logger::init_logger;
use mechtools::config_manager::with_config_manager;

pub fn main() {
    let level = with_config_manager(|manager| manager.get_config().level_filter());
    if let Err(e) = init_logger(level) {
        eprintln!("logger was not initialized: {}", e);
    }
    let task: usize = 0;
    mechtools_examples(task);
}
