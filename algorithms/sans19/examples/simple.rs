//! SANS19 Basic Example
//!
//! Minimal usage: `let digest = sans19::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    let data = b"Hello, World!";
    let digest = sans19::hash(data);
    let wide = sans19::hash_wide(data);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("Hash: {}", hex::encode(digest));
    println!("Wide: {}", hex::encode(wide));
    println!("Self-test: {}", if sans19::self_test() { "passed" } else { "failed" });
}
