//! Binary target used by `trunk` for the client-side-rendered build.

fn main() {
    #[cfg(feature = "csr")]
    forum::start();
}
