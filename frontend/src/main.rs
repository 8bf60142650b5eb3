use notes_frontend::logging::init_logging;
use notes_frontend::NoteManager;

fn main() {
    init_logging();
    yew::start_app::<NoteManager>();
}
