use crate as devrand;
use devrand::{alphabet, Entropy, ErrorKind, Source};

const TRIALS: usize = 100_000;

fn sources() -> [Source; 3] {
    [Source::Fast, Source::Secure, Source::urandom()]
}

#[test]
fn int63n_stays_in_interval() {
    let entropy = Entropy::new();
    for source in sources() {
        for _ in 0..TRIALS {
            let n = entropy.int63n(10, &source).unwrap();
            assert!((0..10).contains(&n), "{source}: {n}");
        }
    }
}

#[test]
fn bytes_have_requested_length() {
    let entropy = Entropy::new();
    for source in sources() {
        for length in [1, 7, 8, 10, 4096] {
            assert_eq!(entropy.bytes(length, &source).unwrap().len(), length);
        }
    }
}

#[test]
fn chars_come_from_alphabet() {
    let entropy = Entropy::new();
    for source in sources() {
        let s = entropy.chars(10, alphabet::LETTERS, &source).unwrap();
        assert_eq!(s.chars().count(), 10);
        assert!(s.chars().all(|c| alphabet::LETTERS.contains(&c)));
    }
}

#[test]
fn permutations_are_distinct() {
    let entropy = Entropy::new();
    for (source, trials, max) in [
        (Source::Fast, 50, 10_000),
        (Source::Secure, 5, 10_000),
        (Source::urandom(), 5, 1_000),
    ] {
        for _ in 0..trials {
            let length: usize = entropy.fast().bounded(1..=max);
            let perm = entropy.permutation(length, &source).unwrap();
            assert_eq!(perm.len(), length);
            let mut seen = vec![false; length];
            for p in perm {
                assert!(p < length);
                assert!(!seen[p]);
                seen[p] = true;
            }
        }
    }
}

#[test]
fn random_permutation_preserves_elements() {
    let entropy = Entropy::new();
    let input: Vec<i64> = vec![3, 1, 4, 1, 5, 9, 2];
    let mut expected = input.clone();
    expected.sort();
    for (source, trials) in [
        (Source::Fast, 10_000),
        (Source::Secure, 10_000),
        (Source::urandom(), 1_000),
    ] {
        for _ in 0..trials {
            let mut output = vec![0; input.len()];
            entropy
                .random_permutation(&input, &mut output, &source)
                .unwrap();
            output.sort();
            assert_eq!(output, expected);
        }
    }
}

#[test]
fn random_permutation_reaches_every_arrangement() {
    let entropy = Entropy::with_seed(31);
    let input = ['a', 'b', 'c'];
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1_000 {
        let mut output = [' '; 3];
        entropy
            .random_permutation(&input, &mut output, &Source::Fast)
            .unwrap();
        seen.insert(output);
    }
    assert_eq!(seen.len(), 6);
}

#[test]
fn uuid_always_succeeds() {
    let entropy = Entropy::new();
    for _ in 0..TRIALS / 10 {
        assert_eq!(entropy.uuid().unwrap().len(), 36);
    }
}

#[test]
fn zero_lengths_are_invalid() {
    let entropy = Entropy::new();
    for source in sources() {
        let errors = [
            entropy.bytes(0, &source).unwrap_err(),
            entropy.chars(0, alphabet::NUMBER, &source).unwrap_err(),
            entropy.string(0, &source).unwrap_err(),
            entropy.permutation(0, &source).unwrap_err(),
            entropy.int63n(0, &source).unwrap_err(),
            entropy.int63n(-3, &source).unwrap_err(),
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{err}");
        }
    }
}

#[test]
fn missing_device_is_environment_error() {
    let entropy = Entropy::new();
    let source: Source = "/nonexistent/devrand-device".parse().unwrap();
    let err = entropy.bytes(4, &source).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Environment);
    assert!(err.to_string().contains("/nonexistent/devrand-device"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn entropy_moves_between_threads() {
    let entropy = Entropy::with_seed(5);
    let handle = std::thread::spawn(move || entropy.int64_fast().unwrap());
    handle.join().unwrap();
}

#[test]
#[ignore]
fn throughput() {
    // Compare how fast each source delivers bytes.
    // Run with `cargo test throughput --release -- --ignored --nocapture`
    use std::time::Instant;

    const BUFFER_SIZE: usize = 1 << 16;
    const ITERS: usize = 256;

    let entropy = Entropy::new();
    let mut buffer = vec![0; BUFFER_SIZE];
    let gigs = ((ITERS * BUFFER_SIZE) as f64) / ((1 << 30) as f64);

    println!("\nThroughputs:");
    for source in sources() {
        let start = Instant::now();
        for _ in 0..ITERS {
            entropy.fill(&mut buffer, &source).unwrap();
        }
        let secs = start.elapsed().as_secs_f64();
        println!("  {source}: {:.3} GB/s", gigs / secs);
    }
}
