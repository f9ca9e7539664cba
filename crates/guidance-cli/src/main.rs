use std::process;

fn main() {
    match guidance_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("guidance error: {err}");
            process::exit(1);
        }
    }
}
