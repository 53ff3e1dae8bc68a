use std::collections::HashMap;

use lsp_types::MarkupContent;

/// A documentation description: plain text, or markdown that is already
/// structured for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Description {
    Plain(String),
    Markdown(MarkupContent),
}

/// Documentation for one CSS construct (property, at-directive, pseudo).
#[derive(Debug, Clone, PartialEq)]
pub struct DocEntry {
    pub description: Description,
    /// Compact compatibility string, e.g. `"E12,FF28,S9,C29,O16"`.
    pub browsers: Option<String>,
}

impl DocEntry {
    pub fn plain(description: &str) -> Self {
        DocEntry {
            description: Description::Plain(description.to_string()),
            browsers: None,
        }
    }

    pub fn with_browsers(description: &str, browsers: &str) -> Self {
        DocEntry {
            description: Description::Plain(description.to_string()),
            browsers: Some(browsers.to_string()),
        }
    }
}

/// Read-only documentation tables keyed by construct name.
///
/// `bundled()` loads the built-in data; `empty()` plus the `add_*` methods
/// let embedders supply their own entries.
pub struct CssData {
    properties: HashMap<String, DocEntry>,
    at_directives: HashMap<String, DocEntry>,
    pseudo_classes: HashMap<String, DocEntry>,
    pseudo_elements: HashMap<String, DocEntry>,
}

impl CssData {
    pub fn empty() -> Self {
        CssData {
            properties: HashMap::new(),
            at_directives: HashMap::new(),
            pseudo_classes: HashMap::new(),
            pseudo_elements: HashMap::new(),
        }
    }

    pub fn bundled() -> Self {
        let mut data = CssData::empty();
        for (name, description, browsers) in PROPERTY_DATA {
            let entry = match browsers {
                Some(b) => DocEntry::with_browsers(description, b),
                None => DocEntry::plain(description),
            };
            data.properties.insert((*name).to_string(), entry);
        }
        for (name, description) in AT_DIRECTIVE_DATA {
            data.at_directives
                .insert((*name).to_string(), DocEntry::plain(description));
        }
        for (name, description) in PSEUDO_CLASS_DATA {
            data.pseudo_classes
                .insert((*name).to_string(), DocEntry::plain(description));
        }
        for (name, description) in PSEUDO_ELEMENT_DATA {
            data.pseudo_elements
                .insert((*name).to_string(), DocEntry::plain(description));
        }
        data
    }

    pub fn property(&self, name: &str) -> Option<&DocEntry> {
        self.properties.get(name)
    }

    pub fn at_directive(&self, name: &str) -> Option<&DocEntry> {
        self.at_directives.get(name)
    }

    pub fn pseudo_class(&self, name: &str) -> Option<&DocEntry> {
        self.pseudo_classes.get(name)
    }

    pub fn pseudo_element(&self, name: &str) -> Option<&DocEntry> {
        self.pseudo_elements.get(name)
    }

    pub fn add_property(&mut self, name: &str, entry: DocEntry) {
        self.properties.insert(name.to_string(), entry);
    }

    pub fn add_at_directive(&mut self, name: &str, entry: DocEntry) {
        self.at_directives.insert(name.to_string(), entry);
    }

    pub fn add_pseudo_class(&mut self, name: &str, entry: DocEntry) {
        self.pseudo_classes.insert(name.to_string(), entry);
    }

    pub fn add_pseudo_element(&mut self, name: &str, entry: DocEntry) {
        self.pseudo_elements.insert(name.to_string(), entry);
    }
}

const BROWSER_NAMES: &[(&str, &str)] = &[
    ("E", "Edge"),
    ("FF", "Firefox"),
    ("S", "Safari"),
    ("C", "Chrome"),
    ("IE", "IE"),
    ("O", "Opera"),
];

/// Derive a human-readable support label from a compatibility string:
/// `"E12,FF28"` → `"Edge 12, Firefox 28"`. Unknown browser codes pass
/// through verbatim. An empty string derives no label.
pub fn browser_label(browsers: &str) -> Option<String> {
    let mut parts = Vec::new();
    for token in browsers.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let digits = token
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(token.len());
        let (code, version) = token.split_at(digits);
        match BROWSER_NAMES.iter().find(|(c, _)| *c == code) {
            Some((_, name)) if version.is_empty() => parts.push((*name).to_string()),
            Some((_, name)) => parts.push(format!("{name} {version}")),
            None => parts.push(token.to_string()),
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

// Descriptions follow the MDN one-line summaries. Compatibility strings
// list the first supporting version per browser.
const PROPERTY_DATA: &[(&str, &str, Option<&str>)] = &[
    ("align-content", "Aligns a flex container's lines within the flex container when there is extra space in the cross-axis.", Some("E12,FF28,S9,C29,O16")),
    ("align-items", "Aligns flex items along the cross axis of the current line of the flex container.", Some("E12,FF20,S9,C29,O16")),
    ("align-self", "Allows the default alignment along the cross axis to be overridden for individual flex items.", Some("E12,FF20,S9,C29,O16")),
    ("animation", "Shorthand property combines six of the animation properties into a single property.", Some("E12,FF16,S9,C43,O30")),
    ("background", "Shorthand property for setting most background properties at the same place in the style sheet.", Some("E12,FF1,S1,C1,IE4,O3.5")),
    ("background-color", "Sets the background color of an element.", Some("E12,FF1,S1,C1,IE4,O3.5")),
    ("background-image", "Sets one or more background images for an element.", Some("E12,FF1,S1,C1,IE4,O3.5")),
    ("background-position", "Sets the initial position of a background image.", Some("E12,FF1,S1,C1,IE4,O3.5")),
    ("background-repeat", "Defines how background images are repeated.", Some("E12,FF1,S1,C1,IE4,O3.5")),
    ("background-size", "Specifies the size of the background images.", Some("E12,FF4,S5,C3,IE9,O10")),
    ("border", "Shorthand property for setting border width, style, and color.", Some("E12,FF1,S1,C1,IE4,O3.5")),
    ("border-color", "The color of the border around all four edges of an element.", Some("E12,FF1,S1,C1,IE4,O3.5")),
    ("border-radius", "Defines the radii of the outer border edge.", Some("E12,FF4,S5,C4,IE9,O10.5")),
    ("border-style", "The style of the border around edges of an element.", Some("E12,FF1,S1,C1,IE4,O3.5")),
    ("border-width", "Shorthand that sets the four 'border-*-width' properties.", Some("E12,FF1,S1,C1,IE4,O3.5")),
    ("bottom", "Specifies how far an absolutely positioned box's bottom margin edge is offset above the bottom edge of the box's containing block.", Some("E12,FF1,S1,C1,IE5,O6")),
    ("box-shadow", "Attaches one or more drop shadows to the box.", Some("E12,FF4,S5.1,C10,IE9,O10.5")),
    ("box-sizing", "Specifies the behavior of the width and height properties.", Some("E12,FF29,S5.1,C10,IE8,O7")),
    ("color", "Sets the color of an element's text.", Some("E12,FF1,S1,C1,IE3,O3.5")),
    ("content", "Determines which page-based occurrence of a given element is applied to a counter or string value.", Some("E12,FF1,S1,C1,IE8,O4")),
    ("cursor", "Allows control over cursor appearance in an element.", Some("E12,FF1,S1.2,C1,IE4,O7")),
    ("display", "In combination with 'float' and 'position', determines the type of box or boxes that are generated for an element.", Some("E12,FF1,S1,C1,IE4,O7")),
    ("flex", "Specifies the components of a flexible length.", Some("E12,FF20,S9,C29,IE11,O12.1")),
    ("flex-direction", "Specifies how flex items are placed in the flex container, by setting the direction of the flex container's main axis.", Some("E12,FF81,S9,C29,IE11,O12.1")),
    ("flex-wrap", "Controls whether the flex container is single-line or multi-line.", Some("E12,FF28,S9,C29,IE11,O17")),
    ("float", "Specifies how a box should be floated.", Some("E12,FF1,S1,C1,IE4,O7")),
    ("font", "Shorthand property for setting 'font-style', 'font-variant', 'font-weight', 'font-size', 'line-height', and 'font-family'.", Some("E12,FF1,S1,C1,IE4,O3.5")),
    ("font-family", "Specifies a prioritized list of font family names or generic family names.", Some("E12,FF1,S1,C1,IE3,O3.5")),
    ("font-size", "Indicates the desired height of glyphs from the font.", Some("E12,FF1,S1,C1,IE5.5,O7")),
    ("font-style", "Allows italic or oblique faces to be selected.", Some("E12,FF1,S1,C1,IE4,O7")),
    ("font-weight", "Specifies weight of glyphs in the font, their degree of blackness or stroke thickness.", Some("E12,FF1,S1,C2,IE3,O3.5")),
    ("gap", "Defines the gaps between rows and columns in grid, flex and multi-column layouts.", Some("E16,FF61,S12,C66,O53")),
    ("grid-template-columns", "Specifies, as a space-separated track list, the line names and track sizing functions of the grid.", Some("E16,FF52,S10.1,C57,O44")),
    ("grid-template-rows", "Specifies, as a space-separated track list, the line names and track sizing functions of the grid.", Some("E16,FF52,S10.1,C57,O44")),
    ("height", "Specifies the height of the content area, padding area or border area of a box.", Some("E12,FF1,S1,C1,IE4,O7")),
    ("justify-content", "Aligns flex items along the main axis of the current line of the flex container.", Some("E12,FF20,S9,C29,IE11,O12.1")),
    ("left", "Specifies how far an absolutely positioned box's left margin edge is offset to the right of the left edge of the box's containing block.", Some("E12,FF1,S1,C1,IE5.5,O5")),
    ("line-height", "Determines the block-progression dimension of the text content area of an inline box.", Some("E12,FF1,S1,C1,IE4,O7")),
    ("margin", "Shorthand property to set values for the thickness of the margin area.", Some("E12,FF1,S1,C1,IE3,O3.5")),
    ("max-width", "Allows authors to constrain content width to a certain range.", Some("E12,FF1,S1.3,C1,IE7,O4")),
    ("min-width", "Allows authors to constrain content width to a certain range.", Some("E12,FF1,S1.3,C1,IE7,O4")),
    ("opacity", "Opacity of an element's text, where 1 is opaque and 0 is entirely transparent.", Some("E12,FF1,S2,C1,IE9,O9")),
    ("outline", "Shorthand property for 'outline-style', 'outline-width', and 'outline-color'.", Some("E94,FF88,S1.2,C94,IE8,O80")),
    ("overflow", "Shorthand for setting 'overflow-x' and 'overflow-y'.", Some("E12,FF1,S1,C1,IE4,O7")),
    ("padding", "Shorthand property to set values for the thickness of the padding area.", Some("E12,FF1,S1,C1,IE4,O3.5")),
    ("position", "Specifies which positioning scheme is used to calculate the position of a box.", Some("E12,FF1,S1,C1,IE4,O4")),
    ("right", "Specifies how far an absolutely positioned box's right margin edge is offset to the left of the right edge of the box's containing block.", Some("E12,FF1,S1,C1,IE5.5,O5")),
    ("src", "Reference to font by URL or by font name.", None),
    ("text-align", "Describes how inline contents of a block are horizontally aligned.", Some("E12,FF1,S1,C1,IE3,O3.5")),
    ("text-decoration", "Decorations applied to font used for an element's text.", Some("E12,FF1,S1,C1,IE3,O3.5")),
    ("top", "Specifies how far an absolutely positioned box's top margin edge is offset below the top edge of the box's containing block.", Some("E12,FF1,S1,C1,IE5,O6")),
    ("transform", "Specifies a list of transforms to be applied to the element.", Some("E12,FF16,S9,C36,IE10,O23")),
    ("transition", "Shorthand property combines four of the transition properties into a single property.", Some("E12,FF16,S9,C26,IE10,O12.1")),
    ("visibility", "Specifies whether the boxes generated by an element are rendered.", Some("E12,FF1,S1,C1,IE4,O4")),
    ("white-space", "Specifies how whitespace is handled in an element.", Some("E12,FF1,S1,C1,IE5.5,O4")),
    ("width", "Specifies the width of the content area, padding area or border area of a box.", Some("E12,FF1,S1,C1,IE4,O4")),
    ("z-index", "For a positioned box, the 'z-index' property specifies the stack level of the box.", Some("E12,FF1,S1,C1,IE4,O4")),
];

const AT_DIRECTIVE_DATA: &[(&str, &str)] = &[
    ("@charset", "Defines character set of the document."),
    ("@font-face", "Allows for linking to fonts that are automatically activated when needed."),
    ("@import", "Includes content of another file."),
    ("@keyframes", "Defines set of animation key frames."),
    ("@media", "Defines a stylesheet for a particular media type."),
    ("@namespace", "Declares a prefix and associates it with a namespace name."),
    ("@page", "Directive defines various page parameters."),
    ("@supports", "A conditional group rule whose condition tests whether the user agent supports CSS property:value pairs."),
];

const PSEUDO_CLASS_DATA: &[(&str, &str)] = &[
    (":active", "Applies while an element is being activated by the user. For example, between the times the user presses the mouse button and releases it."),
    (":checked", "Radio and checkbox elements can be toggled by the user. Some menu items are 'checked' when the user selects them. When such elements are toggled 'on' the :checked pseudo-class applies."),
    (":disabled", "Represents user interface elements that are in a disabled state; such elements have a corresponding enabled state."),
    (":empty", "Represents an element that has no children at all."),
    (":enabled", "Represents user interface elements that are in an enabled state; such elements have a corresponding disabled state."),
    (":first-child", "Same as :nth-child(1). Represents an element that is the first child of some other element."),
    (":focus", "Applies while an element has the focus (accepts keyboard or mouse events, or other forms of input)."),
    (":hover", "Applies while the user designates an element with a pointing device, but does not necessarily activate it. For example, a visual user agent could apply this pseudo-class when the cursor (mouse pointer) hovers over a box generated by the element."),
    (":last-child", "Same as :nth-last-child(1). Represents an element that is the last child of some other element."),
    (":link", "Applies to links that have not yet been visited."),
    (":not", "The negation pseudo-class, :not(X), is a functional notation taking a simple selector as an argument. It represents an element that is not represented by its argument."),
    (":nth-child", "Represents an element that has an+b-1 siblings before it in the document tree, for any positive integer or zero value of n, and has a parent element."),
    (":root", "Represents an element that is the root of the document. In HTML 4, this is always the HTML element."),
    (":visited", "Applies once the link has been visited by the user."),
];

const PSEUDO_ELEMENT_DATA: &[(&str, &str)] = &[
    ("::after", "Represents a styleable child pseudo-element immediately after the originating element's actual content."),
    ("::before", "Represents a styleable child pseudo-element immediately before the originating element's actual content."),
    ("::first-letter", "Represents the first letter of an element, if it is not preceded by any other content (such as images or inline tables) on its line."),
    ("::first-line", "Describes the contents of the first formatted line of an element."),
    ("::placeholder", "Represents placeholder text in an input field."),
    ("::selection", "Represents the portion of a document that has been highlighted by the user."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_lookups() {
        let data = CssData::bundled();
        assert!(data.property("color").is_some());
        assert!(data.at_directive("@media").is_some());
        assert!(data.pseudo_class(":hover").is_some());
        assert!(data.pseudo_element("::before").is_some());
        assert!(data.property("no-such-property").is_none());
    }

    #[test]
    fn test_browser_label_versions() {
        assert_eq!(
            browser_label("E12,FF28,S9,C29,O16").as_deref(),
            Some("Edge 12, Firefox 28, Safari 9, Chrome 29, Opera 16")
        );
    }

    #[test]
    fn test_browser_label_unversioned_and_unknown() {
        assert_eq!(
            browser_label("E,F,S,C,IJ").as_deref(),
            Some("Edge, F, Safari, Chrome, IJ")
        );
    }

    #[test]
    fn test_browser_label_empty() {
        assert_eq!(browser_label(""), None);
        assert_eq!(browser_label(" , "), None);
    }

    #[test]
    fn test_custom_entries_override_bundled() {
        let mut data = CssData::bundled();
        data.add_property("color", DocEntry::plain("Custom description."));
        let entry = data.property("color").unwrap();
        assert_eq!(
            entry.description,
            Description::Plain("Custom description.".to_string())
        );
        assert!(entry.browsers.is_none());
    }
}
