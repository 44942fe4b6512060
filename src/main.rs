fn main() {
    buildprep::app::cli::run();
}
