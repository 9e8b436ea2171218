//! Element classification driving the translator.
//!
//! Maps a tag name to the semantic category that selects the transient node
//! variant. The sets follow the conventional HTML5 content categories;
//! anything unlisted is untranslatable and degrades to a placeholder.

/// Semantic category of a markup element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementClass {
    /// A hyperlink element carrying a resolved target.
    Anchor,
    /// Inline semantic or edit elements wrapping phrasing content.
    TextPhrasing,
    /// Replaced/embedded content rendered as its own box.
    Embedded,
    /// Sectioning elements and headings.
    Sectioning,
    /// Grouping elements (paragraphs, lists, figures).
    Grouping,
    /// Table structure elements.
    Tabular,
    /// Interactive controls; unsupported and dropped with their subtree.
    Interactive,
    /// Script-supporting, metadata and unknown elements; not rendered.
    Untranslatable,
}

/// Classify a tag name.
///
/// Tag names are folded to ASCII lowercase before matching, so hand-built
/// trees with uppercase tags classify the same as parser output.
pub fn classify(tag_name: &str) -> ElementClass {
    let tag = tag_name.to_ascii_lowercase();
    match tag.as_str() {
        "a" => ElementClass::Anchor,

        "abbr" | "b" | "bdo" | "br" | "cite" | "code" | "data" | "del" | "dfn" | "em" | "i"
        | "ins" | "kbd" | "mark" | "q" | "s" | "samp" | "small" | "span" | "strong" | "sub"
        | "sup" | "time" | "u" | "var" | "wbr" => ElementClass::TextPhrasing,

        "audio" | "canvas" | "embed" | "iframe" | "img" | "object" | "picture" | "svg"
        | "video" => ElementClass::Embedded,

        "address" | "article" | "aside" | "body" | "footer" | "h1" | "h2" | "h3" | "h4" | "h5"
        | "h6" | "header" | "hgroup" | "main" | "nav" | "section" => ElementClass::Sectioning,

        "blockquote" | "dd" | "div" | "dl" | "dt" | "figcaption" | "figure" | "hr" | "li"
        | "menu" | "ol" | "p" | "pre" | "ul" => ElementClass::Grouping,

        "caption" | "col" | "colgroup" | "table" | "tbody" | "td" | "tfoot" | "th" | "thead"
        | "tr" => ElementClass::Tabular,

        "button" | "datalist" | "details" | "dialog" | "fieldset" | "form" | "input" | "label"
        | "legend" | "meter" | "optgroup" | "option" | "output" | "progress" | "select"
        | "summary" | "textarea" => ElementClass::Interactive,

        _ => ElementClass::Untranslatable,
    }
}
