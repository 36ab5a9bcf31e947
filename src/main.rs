fn main() {
    if let Err(e) = tlog_compdb::cli::run() {
        println!("{:#}", e);
        std::process::exit(1);
    }
}
