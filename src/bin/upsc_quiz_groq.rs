use upsc_quiz::model::SourceKind;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    log::info!("starting UPSC quiz with questions from Groq");
    upsc_quiz::run("UPSC AI Quiz (Groq) 🏛️", Some(SourceKind::Groq))
}
