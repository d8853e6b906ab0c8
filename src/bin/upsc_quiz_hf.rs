use upsc_quiz::model::SourceKind;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    log::info!("starting UPSC quiz with questions from Hugging Face");
    upsc_quiz::run("UPSC AI-Generated Quiz 🏛️", Some(SourceKind::HuggingFace))
}
