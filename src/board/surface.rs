//! Display surfaces the board renders onto.

use crate::cards::Card;

/// A container that accepts card representations.
///
/// Rendering always calls `clear` first, so a surface never mixes cards
/// from two games.
pub trait Surface {
    /// Remove every card representation.
    fn clear(&mut self);

    /// Append the representation of one card.
    fn insert(&mut self, card: &Card);
}

/// Plain-text grid.
///
/// Face-down cards show their position number so a player can pick them;
/// flipped cards show their symbol.
#[derive(Clone, Debug)]
pub struct TextSurface {
    columns: usize,
    cells: Vec<String>,
}

impl TextSurface {
    /// Create a surface laying cards out `columns` per row.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            cells: Vec::new(),
        }
    }

    /// Number of cells currently drawn.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if nothing is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rendered cells in insertion order.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

impl Default for TextSurface {
    fn default() -> Self {
        Self::new(4)
    }
}

impl Surface for TextSurface {
    fn clear(&mut self) {
        self.cells.clear();
    }

    fn insert(&mut self, card: &Card) {
        let cell = if card.is_flipped() {
            format!("[{}]", card.value)
        } else {
            format!("[{:>2}]", card.index)
        };
        self.cells.push(cell);
    }
}

impl std::fmt::Display for TextSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.columns) {
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

/// HTML markup, one `div.card` per card.
///
/// The front face is the blank back of the card; the back face carries the
/// symbol and is revealed by the `flipped` class.
#[derive(Clone, Debug, Default)]
pub struct HtmlSurface {
    markup: String,
    count: usize,
}

impl HtmlSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered markup.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Number of cards rendered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if nothing is rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Surface for HtmlSurface {
    fn clear(&mut self) {
        self.markup.clear();
        self.count = 0;
    }

    fn insert(&mut self, card: &Card) {
        let class = if card.is_flipped() { "card flipped" } else { "card" };
        let value = escape(card.value.as_str());

        self.markup.push_str(&format!(
            "<div class=\"{class}\" data-value=\"{value}\" data-index=\"{index}\">\
             <div class=\"card-inner\">\
             <div class=\"card-face card-front\"></div>\
             <div class=\"card-face card-back\">{value}</div>\
             </div></div>\n",
            index = card.index,
        ));
        self.count += 1;
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
