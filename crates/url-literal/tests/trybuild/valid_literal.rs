use url_literal::url;

fn main() {
    let u = url!("https://www.apple.com");
    assert_eq!(u.scheme(), "https");
}
