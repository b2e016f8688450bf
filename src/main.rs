fn main() {
    std::process::exit(asdf_plugin::run_cli());
}
