fn main() {
    workflow_manager::app::cli::run();
}
