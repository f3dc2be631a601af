use std::env;

#[tokio::main]
async fn main() {
    let raw_args: Vec<String> = env::args().collect();
    match raw_args.get(1).map(|s| s.as_str()) {
        Some("serve") => {
            let port = raw_args
                .get(2)
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(8080);
            if let Err(e) = nestegg::api::run_http_server(port).await {
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Some("simulate") => {
            if let Err(msg) = nestegg::api::run_simulate_cli(&raw_args[1..]) {
                eprintln!("{msg}");
                std::process::exit(1);
            }
        }
        None | Some("examples") => nestegg::api::print_example_reports(),
        Some(_) => {
            eprintln!("Usage: nestegg [examples | simulate <flags> | serve [port]]");
            std::process::exit(1);
        }
    }
}
