fn main() {
    mandelbrot_viewer::run_gui();
}
