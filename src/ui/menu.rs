use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;

/// File menu: Open, Save, separator, Check Spelling, separator, Exit.
pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    menu.add("&File/&Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("&File/&Save...", Shortcut::Ctrl | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("&File/&Check Spelling", Shortcut::Ctrl | 'k', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::CheckSpelling) });
    menu.add("&File/E&xit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileExit) });
}
