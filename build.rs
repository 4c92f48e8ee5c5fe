fn main() {
    // Host builds (unit tests of the scanning core) have no ESP-IDF environment.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }
}
