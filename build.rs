#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    let mut res = WindowsResource::new();
    res.set("FileDescription", "rTeamcal CLI")
        .set("ProductName", "rTeamcal")
        .set("OriginalFilename", "rteamcal.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"));

    // The icon is optional: source checkouts without res/ still build.
    if std::path::Path::new("res/rteamcal.ico").exists() {
        res.set_icon("res/rteamcal.ico");
    }

    res.compile().expect("Failed to embed Windows resources");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
