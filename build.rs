#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    const ICON: &str = "res/rattendance.ico";
    if !std::path::Path::new(ICON).exists() {
        return;
    }

    let mut res = WindowsResource::new();
    res.set_icon(ICON)
        .set("FileDescription", "rAttendance CLI")
        .set("ProductName", "rAttendance")
        .set("OriginalFilename", "rattendance.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
