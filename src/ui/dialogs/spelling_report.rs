use fltk::{
    button::Button,
    frame::Frame,
    group::Flex,
    prelude::*,
    text::{TextBuffer, TextDisplay},
    window::Window,
};

use super::run_dialog;
use crate::app::spelling::SpellingReport;

/// Show the result of a spelling check once, after the document was marked up.
pub fn show_spelling_report(report: &SpellingReport) {
    let mut dialog = Window::default()
        .with_size(360, 300)
        .with_label("Check Spelling")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 340, 280, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(8);

    let mut summary = Frame::default().with_label(&report.summary());
    summary.set_label_size(13);
    flex.fixed(&summary, 30);

    let mut words = TextBuffer::default();
    words.set_text(&report.unknown.join("\n"));
    let mut list = TextDisplay::default();
    list.set_buffer(words);
    if report.is_clean() {
        list.hide();
    }

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 30);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
