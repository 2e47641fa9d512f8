use url_literal::url;

fn main() {
    let _ = url!(42);
}
