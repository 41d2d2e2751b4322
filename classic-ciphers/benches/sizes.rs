use classic_ciphers::caesar;
use classic_ciphers::keypair::{KeyPair, generate_key_pair};
use classic_ciphers::preset::prime_pool::DEFAULT_PRIME_POOL;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fake::Fake;
use fake::faker::lorem::en::Words;

fn setup_keys() -> KeyPair {
    generate_key_pair(DEFAULT_PRIME_POOL.primes()).expect("Failed to generate key pair")
}

fn make_string(len: usize) -> String {
    // Repeat word sequences until the target length is reached
    let mut s = String::with_capacity(len);
    while s.len() < len {
        let words: Vec<String> = Words(10..20).fake();
        if !s.is_empty() {
            s.push(' ');
        }
        s.push_str(&words.join(" "));
        if s.len() > len {
            s.truncate(len);
        }
    }
    s
}

fn bench_sizes(c: &mut Criterion) {
    let key_pair = setup_keys();
    let public_key = key_pair.public_key();
    let private_key = key_pair.private_key();

    let sizes: [(usize, &str); 3] = [(1_000, "1k"), (10_000, "10k"), (100_000, "100k")];

    let mut group = c.benchmark_group("Sizes Encrypt/Decrypt");

    for (len, label) in sizes {
        let data = make_string(len);
        // precompute ciphertext for decrypt bench to avoid measuring encrypt twice
        let ciphertext = public_key.encrypt(&data).expect("encrypt");

        group.bench_with_input(BenchmarkId::new("rsa_encrypt", label), &data, |b, d| {
            b.iter(|| public_key.encrypt(black_box(d)).expect("encrypt"));
        });

        group.bench_with_input(BenchmarkId::new("rsa_decrypt", label), &ciphertext, |b, ctext| {
            b.iter(|| private_key.decrypt(black_box(ctext)).expect("decrypt"));
        });

        group.bench_with_input(BenchmarkId::new("caesar_encrypt", label), &data, |b, d| {
            b.iter(|| caesar::encrypt(black_box(d), 13));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sizes);
criterion_main!(benches);
