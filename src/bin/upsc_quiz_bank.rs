use upsc_quiz::model::SourceKind;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    log::info!("starting UPSC quiz with questions from the local question bank");
    upsc_quiz::run("UPSC Question Bank Quiz 🏛️", Some(SourceKind::LocalBank))
}
