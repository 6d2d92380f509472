//! Plain-text output for `--print`.

use super::receipt_list::RowText;
use crate::i18n::{I18n, Key};
use crate::state::{RenderState, ViewState, derive_render_state};
use crate::time_format::TimeFormatter;
use std::io::{self, Write};

/// Write one tab-separated line per receipt, in server order.
///
/// An empty result prints the localized empty message. A state that is
/// still loading prints nothing.
pub fn print_receipts(
    out: &mut impl Write,
    state: &ViewState,
    formatter: &TimeFormatter,
    i18n: I18n,
) -> io::Result<()> {
    match derive_render_state(state) {
        RenderState::Loading => Ok(()),
        RenderState::Empty => writeln!(out, "{}", i18n.t(Key::NoReadReceipts)),
        RenderState::Populated => {
            for receipt in state.receipts() {
                let row = RowText::new(receipt, formatter);
                writeln!(out, "{}\t{}\t{}", row.label, row.handle, row.time)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ReadReceipt, ReceiptId, ReceiptUser, UserId};
    use crate::time_format::DisplayZone;

    fn receipt(id: &str, username: &str, name: &str, ts: i64) -> ReadReceipt {
        ReadReceipt::new(
            ReceiptId::new(id).unwrap(),
            ts,
            ReceiptUser::new(UserId::new("u1").unwrap(), username, name),
        )
    }

    fn print(state: &ViewState) -> String {
        let mut out = Vec::new();
        let formatter = TimeFormatter::new("HH:mm", DisplayZone::Utc);
        print_receipts(&mut out, state, &formatter, I18n::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_rows_in_server_order() {
        let state = ViewState::from_parts(
            false,
            vec![
                receipt("r2", "bob", "Bob", 1_610_000_060_000),
                receipt("r1", "alice", "Alice", 1_610_000_000_000),
            ],
        );
        assert_eq!(print(&state), "Bob\t@bob\t06:14\nAlice\t@alice\t06:13\n");
    }

    #[test]
    fn prints_empty_message() {
        assert_eq!(print(&ViewState::new()), "No read receipts\n");
    }

    #[test]
    fn prints_nothing_while_loading() {
        assert_eq!(print(&ViewState::from_parts(true, Vec::new())), "");
    }
}
