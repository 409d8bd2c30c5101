//! Single-order invoice rendered as a PDF.
//!
//! Draws text and table rules directly into uncompressed content streams
//! (PDF 1.4, built-in Helvetica), so the output needs no external assets
//! and opens in any standard viewer. Spills onto additional pages when the
//! line-item table is long.

use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_amount;
use contracts::domain::a001_order::Order;

const PAGE_WIDTH: f64 = 595.0;
const PAGE_HEIGHT: f64 = 842.0;
const MARGIN: f64 = 50.0;
const BOTTOM_MARGIN: f64 = 60.0;

// Line-item table column x positions
const COL_ITEM: f64 = MARGIN;
const COL_QTY: f64 = 330.0;
const COL_UNIT: f64 = 400.0;
const COL_AMOUNT: f64 = 490.0;

/// Render the invoice for one order. `pharmacy_name`/`pharmacy_location`
/// come from the vendor session and form the document header.
pub fn render_invoice(order: &Order, pharmacy_name: &str, pharmacy_location: &str) -> Vec<u8> {
    let mut doc = Composer::new();

    doc.line(18.0, true, "INVOICE");
    if !pharmacy_name.is_empty() {
        doc.line(12.0, true, pharmacy_name);
    }
    if !pharmacy_location.is_empty() {
        doc.line(10.0, false, pharmacy_location);
    }
    doc.gap(6.0);
    doc.line(10.0, false, &format!("Order {}", order.id));
    if !order.created_at.is_empty() {
        doc.line(
            10.0,
            false,
            &format!("Placed: {}", format_datetime(&order.created_at)),
        );
    }
    doc.rule();

    doc.line(11.0, true, "Billed To");
    let customer_name = if order.customer.name.is_empty() {
        match &order.customer.id {
            Some(id) => format!("Customer {id}"),
            None => "Unknown customer".to_string(),
        }
    } else {
        order.customer.name.clone()
    };
    doc.line(10.0, false, &customer_name);
    if !order.customer.mobile.is_empty() {
        doc.line(10.0, false, &order.customer.mobile);
    }
    doc.gap(4.0);

    if !order.delivery_address.is_empty() {
        doc.line(11.0, true, "Delivery Address");
        for part in wrap_text(&order.delivery_address, 90) {
            doc.line(10.0, false, &part);
        }
        doc.gap(4.0);
    }
    doc.rule();

    doc.table_row(true, "Item", "Qty", "Unit Price", "Amount");
    doc.rule();
    for item in &order.items {
        doc.table_row(
            false,
            &truncate(&item.name, 48),
            &item.quantity.to_string(),
            &format_amount(item.price),
            &format_amount(item.line_total()),
        );
    }
    doc.rule();

    doc.amount_row(false, "Subtotal", order.subtotal);
    doc.amount_row(false, "Delivery Charge", order.delivery_charge);
    doc.amount_row(false, "Discount", -order.discount);
    doc.amount_row(true, "Grand Total", order.grand_total);
    doc.gap(6.0);

    if !order.payment_method.is_empty() || !order.payment_status.is_empty() {
        doc.line(
            10.0,
            false,
            &format!(
                "Payment: {} {}",
                order.payment_method, order.payment_status
            ),
        );
    }

    if !order.status_history.is_empty() {
        doc.gap(8.0);
        doc.line(11.0, true, "Status History");
        for event in &order.status_history {
            let stamp = if event.timestamp.is_empty() {
                String::new()
            } else {
                format!(" ({})", format_datetime(&event.timestamp))
            };
            let message = if event.message.is_empty() {
                String::new()
            } else {
                format!(" - {}", event.message)
            };
            doc.line(9.0, false, &format!("{}{}{}", event.status, message, stamp));
        }
    }

    doc.finish()
}

struct Composer {
    pages: Vec<String>,
    y: f64,
}

impl Composer {
    fn new() -> Self {
        Self {
            pages: vec![String::new()],
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn ensure_room(&mut self, height: f64) {
        if self.y - height < BOTTOM_MARGIN {
            self.pages.push(String::new());
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn text_at(&mut self, x: f64, y: f64, size: f64, bold: bool, text: &str) {
        let font = if bold { "/F2" } else { "/F1" };
        let ops = self.pages.last_mut().expect("at least one page");
        ops.push_str(&format!(
            "BT {font} {size:.1} Tf {x:.1} {y:.1} Td ({}) Tj ET\n",
            escape_pdf_text(text)
        ));
    }

    /// One left-aligned line at the cursor, advancing it.
    fn line(&mut self, size: f64, bold: bool, text: &str) {
        let height = size * 1.45;
        self.ensure_room(height);
        self.y -= height;
        self.text_at(MARGIN, self.y, size, bold, text);
    }

    fn table_row(&mut self, bold: bool, item: &str, qty: &str, unit: &str, amount: &str) {
        let size = 10.0;
        let height = size * 1.45;
        self.ensure_room(height);
        self.y -= height;
        let y = self.y;
        self.text_at(COL_ITEM, y, size, bold, item);
        self.text_at(COL_QTY, y, size, bold, qty);
        self.text_at(COL_UNIT, y, size, bold, unit);
        self.text_at(COL_AMOUNT, y, size, bold, amount);
    }

    fn amount_row(&mut self, bold: bool, label: &str, value: f64) {
        let size = 10.0;
        let height = size * 1.45;
        self.ensure_room(height);
        self.y -= height;
        let y = self.y;
        self.text_at(COL_UNIT, y, size, bold, label);
        self.text_at(COL_AMOUNT, y, size, bold, &format_amount(value));
    }

    fn rule(&mut self) {
        self.ensure_room(10.0);
        self.y -= 6.0;
        let y = self.y;
        let ops = self.pages.last_mut().expect("at least one page");
        ops.push_str(&format!(
            "0.5 w {MARGIN:.1} {y:.1} m {:.1} {y:.1} l S\n",
            PAGE_WIDTH - MARGIN
        ));
        self.y -= 4.0;
    }

    fn gap(&mut self, height: f64) {
        self.ensure_room(height);
        self.y -= height;
    }

    /// Assemble the object table, xref, and trailer.
    fn finish(self) -> Vec<u8> {
        let page_count = self.pages.len();
        let kids = (0..page_count)
            .map(|i| format!("{} 0 R", 6 + 2 * i))
            .collect::<Vec<_>>()
            .join(" ");

        let mut objects: Vec<String> = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!("<< /Type /Pages /Kids [{kids}] /Count {page_count} >>"),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>".to_string(),
        ];

        for ops in self.pages {
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}endstream",
                ops.len(),
                ops
            ));
            let content_id = objects.len();
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {content_id} 0 R >>"
            ));
        }

        let mut out = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n");

        let mut offsets = Vec::with_capacity(objects.len());
        for (index, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", index + 1).as_bytes());
        }

        let xref_pos = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_pos}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );

        out
    }
}

/// PDF string literals: escape backslash and parentheses; built-in fonts
/// only cover Latin text, so anything else is replaced.
fn escape_pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            c if c.is_ascii_graphic() || c == ' ' => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{head}...")
}

fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::{Order, OrderLine};

    fn sample_order(item_count: usize) -> Order {
        let mut order: Order = serde_json::from_str(
            r#"{
                "_id": "ord-77",
                "userId": {"name": "Asha Verma", "mobile": "9876543210"},
                "subtotal": 60.0,
                "deliveryCharge": 20.0,
                "discount": 5.0,
                "grandTotal": 75.0,
                "paymentMethod": "COD",
                "paymentStatus": "Unpaid",
                "status": "Pending",
                "address": "12 MG Road, Indiranagar, Bengaluru 560038",
                "createdAt": "2025-09-01T10:15:00Z",
                "statusHistory": [
                    {"status": "Pending", "message": "Order placed", "timestamp": "2025-09-01T10:15:00Z"}
                ]
            }"#,
        )
        .unwrap();
        order.items = (0..item_count)
            .map(|i| OrderLine {
                name: format!("Paracetamol 500mg strip {i}"),
                quantity: 2,
                price: 30.0,
            })
            .collect();
        order
    }

    #[test]
    fn produces_well_formed_pdf() {
        let bytes = render_invoice(&sample_order(2), "Sharma Medicos", "Bengaluru");
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("startxref"));
        assert!(text.contains("(INVOICE)"));
        assert!(text.contains("(Asha Verma)"));
        assert!(text.contains("(Grand Total)"));
        assert!(text.contains("(Sharma Medicos)"));
        assert!(text.contains("(Status History)"));
    }

    #[test]
    fn short_invoice_is_single_page() {
        let bytes = render_invoice(&sample_order(3), "Sharma Medicos", "");
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn long_item_list_spills_onto_more_pages() {
        let bytes = render_invoice(&sample_order(40), "Sharma Medicos", "");
        let text = String::from_utf8_lossy(&bytes);
        assert!(!text.contains("/Count 1"));
        assert!(text.contains("/Count 2"));
    }

    #[test]
    fn xref_offsets_point_at_objects() {
        let bytes = render_invoice(&sample_order(1), "P", "");
        let text = String::from_utf8_lossy(&bytes);
        let xref_at = text.find("xref\n").expect("has xref");
        let entries: Vec<&str> = text[xref_at..]
            .lines()
            .skip(2) // "xref" and "0 N"
            .take_while(|l| l.ends_with("n ") || l.ends_with("f "))
            .collect();
        // first entry is the free head; every offset entry must point at "N 0 obj"
        for entry in entries.iter().skip(1) {
            let offset: usize = entry[..10].parse().unwrap();
            assert!(text[offset..].trim_start().contains(" 0 obj"));
        }
    }

    #[test]
    fn parentheses_in_names_are_escaped() {
        let mut order = sample_order(1);
        order.items[0].name = "Vitamin C (chewable)".to_string();
        let bytes = render_invoice(&order, "P", "");
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("Vitamin C \\(chewable\\)"));
    }
}
