use url_literal::url;

fn main() {
    let _ = url!(some_variable);
}
