use devrand::{Entropy, Source};
use std::io::{self, Write};
use std::process::ExitCode;

const BUFFER_SIZE: usize = 256_usize.pow(2);

/// Streams raw bytes from a source to stdout, e.g. `practrand_input secure | RNG_test stdin`.
/// The source is `fast` (the default), `secure` or a device path.
fn main() -> ExitCode {
    let source = match std::env::args().nth(1) {
        Some(arg) => arg.parse().unwrap_or(Source::Fast),
        None => Source::Fast,
    };
    let entropy = Entropy::new();
    let mut buffer = vec![0; BUFFER_SIZE];
    let mut output = io::stdout().lock();
    loop {
        if let Err(err) = entropy.fill(&mut buffer, &source) {
            eprintln!("practrand_input: {err}");
            return ExitCode::FAILURE;
        }
        if output.write_all(&buffer).is_err() {
            return ExitCode::SUCCESS;
        }
    }
}
