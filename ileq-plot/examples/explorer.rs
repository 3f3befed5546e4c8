use ileq_core::{Bounds, Config, Input, Tag};
use ileq_plot::ExplorerApp;

fn main() {
    let input = Input {
        a: Bounds::new(2.0, 4.0),
        b: Bounds::new(4.0, 6.0),
        tag_a: Tag::Ontic,
        tag_b: Tag::Epistemic,
    };

    ExplorerApp::new(input, Config::default())
        .run("Interval Explorer")
        .unwrap();
}
