use std::io::{self, Write};

use super::display_set::DisplaySet;

/// Stylesheets linked from the page header when none are configured.
///
/// They define the `f11`..`f48` font classes.
pub const DEFAULT_STYLESHEETS: [&str; 2] = [
	"http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css",
	"tagcloud.css",
];

/// Escapes text for use inside HTML content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

/// Writes a complete HTML page for `set`.
///
/// # Behavior
/// - The title and heading read `Top N words in NAME`, where `N` is the
///   number of displayed entries.
/// - Each entry becomes one `<span>` with class `f<font>` and a
///   `count: <count>` tooltip, in the set's order.
///
/// # Errors
/// Returns any error raised by `out`.
pub fn write_html<W: Write>(
	out: &mut W,
	name: &str,
	set: &DisplaySet,
	stylesheets: &[String],
) -> io::Result<()> {
	let heading = format!("Top {} words in {}", set.len(), escape_html(name));

	writeln!(out, "<!DOCTYPE html>")?;
	writeln!(out, "<html lang='en'>")?;
	writeln!(out, "<head>")?;
	writeln!(out, "<title>{}</title>", heading)?;
	for href in stylesheets {
		writeln!(out, "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">", escape_html(href))?;
	}
	writeln!(out, "</head>")?;
	writeln!(out, "<body>")?;
	writeln!(out, "<h2>{}</h2>", heading)?;
	writeln!(out, "<div class='cdiv'>")?;
	writeln!(out, "<p class='cbox'>")?;

	for entry in set {
		writeln!(
			out,
			"<span style='cursor:default' class='f{}' title='count: {}'>{}</span>",
			entry.font,
			entry.count,
			escape_html(&entry.word)
		)?;
	}

	writeln!(out, "</p>")?;
	writeln!(out, "</div>")?;
	writeln!(out, "</body>")?;
	writeln!(out, "</html>")?;
	Ok(())
}

/// Renders `set` to an HTML string.
pub fn to_html(name: &str, set: &DisplaySet, stylesheets: &[String]) -> String {
	let mut buffer = Vec::new();
	// Writing into a Vec cannot fail
	let _ = write_html(&mut buffer, name, set, stylesheets);
	String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cloud::display_set::CloudEntry;

	fn entry(word: &str, count: usize, font: u32) -> CloudEntry {
		CloudEntry { word: word.to_owned(), count, font }
	}

	#[test]
	fn renders_entries_in_order() {
		let set = DisplaySet {
			entries: vec![entry("cat", 2, 30), entry("sat", 1, 11)],
			min_count: 1,
			max_count: 2,
		};
		let html = to_html("pets.txt", &set, &[]);

		assert!(html.contains("<title>Top 2 words in pets.txt</title>"));
		assert!(html.contains("<h2>Top 2 words in pets.txt</h2>"));
		let cat = html.find("class='f30' title='count: 2'>cat</span>").unwrap();
		let sat = html.find("class='f11' title='count: 1'>sat</span>").unwrap();
		assert!(cat < sat);
		assert!(html.trim_end().ends_with("</html>"));
	}

	#[test]
	fn links_stylesheets() {
		let set = DisplaySet { entries: vec![], min_count: 1, max_count: 1 };
		let sheets: Vec<String> = DEFAULT_STYLESHEETS.iter().map(|s| s.to_string()).collect();
		let html = to_html("empty", &set, &sheets);
		assert!(html.contains("<link href=\"tagcloud.css\" rel=\"stylesheet\" type=\"text/css\">"));
		assert!(html.contains("Top 0 words in empty"));
		assert!(!html.contains("<span"));
	}

	#[test]
	fn escapes_markup() {
		assert_eq!(escape_html("<a href='x'>&\"</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;");
		let set = DisplaySet { entries: vec![entry("<b>", 1, 48)], min_count: 1, max_count: 1 };
		let html = to_html("a&b", &set, &[]);
		assert!(html.contains(">&lt;b&gt;</span>"));
		assert!(html.contains("Top 1 words in a&amp;b"));
	}
}
