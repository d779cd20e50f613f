mod diagnostics;
mod error;
mod report;
mod tally;

/// Builds the title the tabletop gives a d20 ability check, with an optional decoration (e.g. `" critsuccess "`)
fn check_title(value: &str, decoration: &str) -> String {
	format!(r#"Rolling 1d20cs20cf1 = (<span class="basicdiceroll{decoration}">{value}</span>)"#)
}

/// Escapes text for use inside a double-quoted attribute
fn escape_attr(text: &str) -> String {
	text.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
}

/// Builds an inline roll result element
fn inline_roll(title: &str, classes: &str) -> String {
	format!(
		r#"<span class="inlinerollresult showtip tipsy-n-right {classes}" title="{}">?</span>"#,
		escape_attr(title)
	)
}

/// Builds a roll message, optionally naming the character who rolled
fn message(name: Option<&str>, rolls: &[String]) -> String {
	let name = name
		.map(|name| format!(r#"<div class="sheet-header"><span class="sheet-charactername"> {name} </span></div>"#))
		.unwrap_or_default();
	format!(
		r#"<div class="message rollresult"><div class="sheet-rolltemplate-rolls">{name}<div class="sheet-rolls">{}</div></div></div>"#,
		rolls.concat()
	)
}

/// Wraps messages into a full chat archive page
fn page(messages: &[String]) -> String {
	format!(
		r#"<!DOCTYPE html><html><head><title>Chat Log</title></head><body><div id="textchat">{}</div></body></html>"#,
		messages.concat()
	)
}
