fn main() {
    infotech::app::cli::run();
}
