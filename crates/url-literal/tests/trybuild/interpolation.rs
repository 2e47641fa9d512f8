use url_literal::url;

fn main() {
    let _ = url!("https://{domain}.com");
}
