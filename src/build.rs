// src/build.rs
fn main() {
    println!("cargo:rerun-if-changed=assets/pl_scrape.ico");
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/pl_scrape.ico");
        if let Err(e) = res.compile() {
            println!("cargo:warning=icon resource not embedded: {e}");
        }
    }
}
