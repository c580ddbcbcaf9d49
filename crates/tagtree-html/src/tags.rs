//! One factory per standard HTML element.
//!
//! Every factory is a named call into [`Element::new`] with the element's
//! tag name and void flag. Attributes and children are added with the
//! fluent [`Element`] methods:
//!
//! ```
//! use tagtree_html::Render;
//! use tagtree_html::tags::{a, li, ul};
//!
//! let nav = ul().attr("id", "nav").add([
//!     li().child(a().attr("href", "#home").child("Home")),
//!     li().child(a().attr("href", "#about").child("About")),
//! ]);
//! assert_eq!(
//!     nav.render().unwrap(),
//!     r##"<ul id="nav"><li><a href="#home">Home</a></li><li><a href="#about">About</a></li></ul>"##
//! );
//! ```
//!
//! `<map>` is produced by [`map_element`] so it does not clash with
//! [`helpers::map`](crate::helpers::map).

use crate::element::Element;

/// Tags whose elements have no children and no closing tag.
pub const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Whether `tag` names a void element (ASCII case-insensitive).
#[must_use]
pub fn is_void_tag(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

macro_rules! elements {
    ($($(#[$meta:meta])* $name:ident => $tag:literal $(, $void:ident)?;)*) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $name() -> Element {
                Element::new($tag, elements!(@void $($void)?))
            }
        )*
    };
    (@void void) => { true };
    (@void) => { false };
}

/// Transparent wrapper rendering only its children.
#[must_use]
pub fn empty() -> Element {
    Element::fragment()
}

elements! {
    // Document metadata
    /// Root element of an HTML document.
    html => "html";
    /// Machine-readable information about the document.
    head => "head";
    /// Document title shown in the browser's title bar or tab.
    title => "title";
    /// Base URL for relative URLs in the document.
    base => "base", void;
    /// Relationship to an external resource, e.g. a stylesheet.
    link => "link", void;
    /// Metadata that other meta-related elements cannot express.
    meta => "meta", void;
    /// Style information (CSS) for the document.
    style => "style";

    // Sectioning root
    /// Content of the document.
    body => "body";

    // Content sectioning
    /// Contact information for a person or organization.
    address => "address";
    /// Self-contained composition.
    article => "article";
    /// Content only indirectly related to the main content.
    aside => "aside";
    /// Footer for its nearest sectioning content.
    footer => "footer";
    /// Introductory content.
    header => "header";
    /// Level 1 section heading.
    h1 => "h1";
    /// Level 2 section heading.
    h2 => "h2";
    /// Level 3 section heading.
    h3 => "h3";
    /// Level 4 section heading.
    h4 => "h4";
    /// Level 5 section heading.
    h5 => "h5";
    /// Level 6 section heading.
    h6 => "h6";
    /// Heading grouped with secondary content.
    hgroup => "hgroup";
    /// Dominant content of the body.
    main => "main";
    /// Navigation links.
    nav => "nav";
    /// Generic standalone section.
    section => "section";
    /// Search or filtering controls.
    search => "search";

    // Text content
    /// Extended quotation.
    blockquote => "blockquote";
    /// Description details in a description list.
    dd => "dd";
    /// Generic flow container.
    div => "div";
    /// Description list.
    dl => "dl";
    /// Term in a description list.
    dt => "dt";
    /// Caption for a figure.
    figcaption => "figcaption";
    /// Self-contained content with an optional caption.
    figure => "figure";
    /// Thematic break between paragraphs.
    hr => "hr", void;
    /// List item.
    li => "li";
    /// Semantic alternative to `ul` for interactive items.
    menu => "menu";
    /// Ordered list.
    ol => "ol";
    /// Paragraph.
    p => "p";
    /// Preformatted text.
    pre => "pre";
    /// Unordered list.
    ul => "ul";

    // Inline text semantics
    /// Hyperlink.
    a => "a";
    /// Abbreviation or acronym.
    abbr => "abbr";
    /// Draws attention to text without extra importance.
    b => "b";
    /// Isolates text for bidirectional formatting.
    bdi => "bdi";
    /// Overrides the current text direction.
    bdo => "bdo";
    /// Line break.
    br => "br", void;
    /// Title of a creative work.
    cite => "cite";
    /// Fragment of computer code.
    code => "code";
    /// Content linked to a machine-readable value.
    data => "data";
    /// Term being defined.
    dfn => "dfn";
    /// Stress emphasis.
    em => "em";
    /// Idiomatic or alternate-voice text.
    i => "i";
    /// Keyboard input.
    kbd => "kbd";
    /// Highlighted text.
    mark => "mark";
    /// Short inline quotation.
    q => "q";
    /// Ruby fallback parenthesis.
    rp => "rp";
    /// Ruby text component.
    rt => "rt";
    /// Ruby annotation.
    ruby => "ruby";
    /// Text that is no longer accurate.
    s => "s";
    /// Sample output.
    samp => "samp";
    /// Side comments and small print.
    small => "small";
    /// Generic inline container.
    span => "span";
    /// Strong importance.
    strong => "strong";
    /// Subscript.
    sub => "sub";
    /// Superscript.
    sup => "sup";
    /// Specific period in time.
    time => "time";
    /// Unarticulated annotation.
    u => "u";
    /// Variable name.
    var => "var";
    /// Word break opportunity.
    wbr => "wbr", void;

    // Image and multimedia
    /// Clickable area inside an image map.
    area => "area", void;
    /// Sound content.
    audio => "audio";
    /// Embedded image.
    img => "img", void;
    /// Image map with clickable areas.
    map_element => "map";
    /// Timed text track for media elements.
    track => "track", void;
    /// Video content.
    video => "video";

    // Embedded content
    /// External content at the specified point.
    embed => "embed", void;
    /// Nested browsing context with restricted access.
    fencedframe => "fencedframe";
    /// Nested browsing context.
    iframe => "iframe";
    /// External resource such as a plugin.
    object => "object";
    /// Alternative images for different scenarios.
    picture => "picture";
    /// Media resource for `picture`, `audio` or `video`.
    source => "source", void;

    // SVG and MathML
    /// Embedded SVG document.
    svg => "svg";
    /// Embedded MathML formula.
    math => "math";

    // Scripting
    /// Drawing surface for graphics.
    canvas => "canvas";
    /// Content used when scripting is disabled.
    noscript => "noscript";
    /// Executable code or data.
    script => "script";

    // Demarcating edits
    /// Removed text.
    del => "del";
    /// Inserted text.
    ins => "ins";

    // Table content
    /// Table title.
    caption => "caption";
    /// Column within a column group.
    col => "col", void;
    /// Group of columns.
    colgroup => "colgroup";
    /// Tabular data.
    table => "table";
    /// Rows forming the table body.
    tbody => "tbody";
    /// Data cell.
    td => "td";
    /// Rows summarizing the columns.
    tfoot => "tfoot";
    /// Header cell.
    th => "th";
    /// Rows forming the column headers.
    thead => "thead";
    /// Table row.
    tr => "tr";

    // Forms
    /// Interactive button.
    button => "button";
    /// Predefined options for other controls.
    datalist => "datalist";
    /// Group of controls within a form.
    fieldset => "fieldset";
    /// Form for submitting information.
    form => "form";
    /// Interactive input control.
    input => "input", void;
    /// Caption for a form control.
    label => "label";
    /// Caption for a fieldset.
    legend => "legend";
    /// Scalar value within a known range.
    meter => "meter";
    /// Group of options in a select.
    optgroup => "optgroup";
    /// Item in a select, optgroup or datalist.
    option => "option";
    /// Result of a calculation or user action.
    output => "output";
    /// Completion progress of a task.
    progress => "progress";
    /// Menu of options.
    select => "select";
    /// Clone of the selected option's content inside a select button.
    selectedcontent => "selectedcontent";
    /// Multi-line plain-text editing control.
    textarea => "textarea";

    // Interactive elements
    /// Disclosure widget.
    details => "details";
    /// Dialog box or subwindow.
    dialog => "dialog";
    /// Summary or legend for a details element.
    summary => "summary";

    // Web components
    /// Placeholder inside a web component.
    slot => "slot";
    /// Content not rendered on load but instantiable from script.
    template => "template";
}
