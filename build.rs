fn main() {
    slint_build::compile("ui/app_window.slint").unwrap();
}
