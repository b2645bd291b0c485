use pretty_assertions::assert_eq;
use steambb_core::{collapse_block_breaks, render};

#[test]
fn newlines_between_text_become_breaks() {
    assert_eq!(render("line one\nline two"), "line one<br>line two");
    assert_eq!(render("a\n\nb"), "a<br><br>b");
}

#[test]
fn windows_line_endings_become_single_breaks() {
    assert_eq!(render("a\r\nb\r\n\r\nc"), "a<br>b<br><br>c");
}

#[test]
fn trailing_newline_is_a_break() {
    assert_eq!(render("text\n"), "text<br>");
}

#[test]
fn heading_carries_no_surrounding_breaks() {
    assert_eq!(
        render("Intro\n[h1]Title[/h1]\nBody"),
        "Intro<h1>Title</h1>Body"
    );
}

#[test]
fn heading_interior_edges_are_trimmed() {
    assert_eq!(render("[h2]\nTitle\n[/h2]"), "<h2>Title</h2>");
}

#[test]
fn rule_carries_no_surrounding_breaks() {
    assert_eq!(render("above\n[hr]\nbelow"), "above<hr>below");
    assert_eq!(render("above\n\n[hr][/hr]\n\nbelow"), "above<hr>below");
}

#[test]
fn list_block_swallows_delimiter_newlines() {
    assert_eq!(
        render("Intro\n[list]\n[*]a\n[*]b\n[/list]\nOutro"),
        "Intro<ul><li>a</li><li>b</li></ul>Outro"
    );
}

#[test]
fn multi_line_item_keeps_inner_break() {
    assert_eq!(
        render("[olist]\n[*]first line\nsecond line\n[*]next\n[/olist]"),
        "<ol><li>first line<br>second line</li><li>next</li></ol>"
    );
}

#[test]
fn code_block_newlines_stay_literal() {
    assert_eq!(
        render("before\n[code]a\n\n  b[/code]\nafter"),
        "before<pre><code>a\n\n  b</code></pre>after"
    );
}

#[test]
fn code_blocks_do_not_leak_into_each_other() {
    assert_eq!(
        render("[code]a\nb[/code]\nmid\ndle\n[code]c\nd[/code]"),
        "<pre><code>a\nb</code></pre>mid<br>dle<pre><code>c\nd</code></pre>"
    );
}

#[test]
fn blank_lines_between_table_rows_and_cells_vanish() {
    assert_eq!(
        render("[table]\n\n[tr]\n[td]a[/td]\n\n[td]b[/td]\n[/tr]\n\n[/table]"),
        "<table><tr><td>a</td><td>b</td></tr></table>"
    );
}

#[test]
fn cell_content_keeps_its_own_breaks() {
    assert_eq!(
        render("[table][tr][td]a\nb[/td][/tr][/table]"),
        "<table><tr><td>a<br>b</td></tr></table>"
    );
}

#[test]
fn table_followed_by_text() {
    assert_eq!(
        render("[table]\n[tr]\n[td]x[/td]\n[/tr]\n[/table]\n\nNext paragraph"),
        "<table><tr><td>x</td></tr></table>Next paragraph"
    );
}

#[test]
fn attributed_quote_over_several_lines() {
    assert_eq!(
        render("[quote=A]\nfirst\nsecond\n[/quote]\nafter"),
        "<blockquote><div class=\"quote-author\">A said:</div>first<br>second</blockquote>after"
    );
}

#[test]
fn inline_tags_do_not_absorb_breaks() {
    assert_eq!(
        render("[b]a[/b]\n[spoiler]b[/spoiler]\n[url=/x]c[/url]"),
        "<b>a</b><br><span class=\"spoiler\">b</span><br><a href=\"/x\" target=\"_blank\" rel=\"noopener noreferrer\">c</a>"
    );
}

#[test]
fn verbatim_newlines_are_restored_untouched() {
    assert_eq!(render("[noparse]a\nb[/noparse]\nc"), "a\nb<br>c");
}

#[test]
fn verbatim_break_markup_is_escaped_not_collapsed() {
    assert_eq!(
        render("[noparse]<br>[/noparse]\n[hr]"),
        "&lt;br&gt;<hr>"
    );
}

#[test]
fn cleanup_is_idempotent_on_rendered_structure() {
    let intermediate = "<table><br> <br><tr><br><td>a</td><br><br><td>b</td><br></tr><br></table><br><br>x<br><hr><br><ul><br><li>a</li><br></ul>";
    let once = collapse_block_breaks(intermediate);
    assert_eq!(once, "<table><tr><td>a</td><td>b</td></tr></table>x<hr><ul><li>a</li></ul>");
    assert_eq!(collapse_block_breaks(&once), once);
}
