//! PDF Export
//!
//! Client-side rasterization of the rendered content region into paginated
//! image-based PDF pages, driven through the page-level `html2canvas` and
//! `jspdf` globals. Pure rendering concern; nothing here touches the data
//! model.

use leptos::task::spawn_local;

/// Export the element matching `selector` as `<file_name>.pdf`.
///
/// Waits for the libraries to appear (they load from a deferred script
/// tag), rasterizes the node once, then slices the canvas into A4-sized
/// pages.
pub fn export_node_to_pdf(selector: &str, file_name: &str) {
    let selector = selector.to_string();
    let file_name = sanitize_file_name(file_name);

    spawn_local(async move {
        let js_code = format!(
            r#"
            (function() {{
                var attempts = 0;
                var maxAttempts = 50;

                function tryExport() {{
                    if (window.html2canvas && window.jspdf) {{
                        var el = document.querySelector('{selector}');
                        if (!el) return;

                        window.html2canvas(el, {{ scale: 2, useCORS: true }}).then(function(canvas) {{
                            var pdf = new window.jspdf.jsPDF('p', 'mm', 'a4');
                            var pageWidth = pdf.internal.pageSize.getWidth();
                            var pageHeight = pdf.internal.pageSize.getHeight();
                            var imgHeight = canvas.height * pageWidth / canvas.width;
                            var remaining = imgHeight;
                            var offset = 0;
                            var img = canvas.toDataURL('image/png');

                            pdf.addImage(img, 'PNG', 0, offset, pageWidth, imgHeight);
                            remaining -= pageHeight;
                            while (remaining > 0) {{
                                offset -= pageHeight;
                                pdf.addPage();
                                pdf.addImage(img, 'PNG', 0, offset, pageWidth, imgHeight);
                                remaining -= pageHeight;
                            }}
                            pdf.save('{file_name}.pdf');
                        }}).catch(function(e) {{
                            console.error('PDF export failed:', e);
                        }});
                    }} else {{
                        attempts++;
                        if (attempts < maxAttempts) {{
                            setTimeout(tryExport, 200);
                        }}
                    }}
                }}
                tryExport();
            }})();
        "#
        );

        let _ = js_sys::eval(&js_code);
    });
}

/// Keep the download name safe to splice into the script above
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    if cleaned.is_empty() {
        "export".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("My Post: v2"), "My-Post--v2");
        assert_eq!(sanitize_file_name(""), "export");
        assert_eq!(sanitize_file_name("plain_name-1"), "plain_name-1");
    }
}
