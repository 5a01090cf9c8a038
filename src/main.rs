fn main() {
    mpls_scriptgen::app::cli::run();
}
