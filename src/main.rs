fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    log::info!("starting UPSC quiz (all sources)");
    upsc_quiz::run("UPSC Quiz 🏛️", None)
}
