use std::fmt::{Debug, Display, Error, Formatter};

use colored::{Color, ColoredString, Colorize};

use super::*;

impl Item {
    /// The label painted in the color it stands for, when there is one.
    pub fn paint(self) -> ColoredString {
        let label = self.label().to_string();
        match label_color(self.label()) {
            Some(color) => label.as_str().color(color).bold(),
            None => label.as_str().normal(),
        }
    }
}

fn label_color(label: char) -> Option<Color> {
    let color = match label.to_ascii_uppercase() {
        'R' => Color::Red,
        'G' => Color::Green,
        'B' => Color::Blue,
        'Y' => Color::Yellow,
        'O' => Color::TrueColor { r: 255, g: 140, b: 0 },
        'V' => Color::TrueColor { r: 148, g: 0, b: 211 },
        'P' => Color::BrightMagenta,
        'C' => Color::Cyan,
        'M' => Color::Magenta,
        'S' => Color::TrueColor { r: 192, g: 192, b: 192 },
        'L' => Color::BrightGreen,
        'T' => Color::TrueColor { r: 0, g: 128, b: 128 },
        'D' => Color::TrueColor { r: 255, g: 215, b: 0 },
        'A' => Color::BrightCyan,
        'I' => Color::TrueColor { r: 75, g: 0, b: 130 },
        _ => return None,
    };
    return Some(color);
}

impl Display for Tube {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        if self.is_empty() {
            return write!(f, "{}", "∅".dimmed());
        }
        for (i, item) in self.items().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item.paint())?;
        }
        Ok(())
    }
}

impl Debug for Tube {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.debug_list().entries(self.items()).finish()
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        for (k, tube) in self.tubes().iter().enumerate() {
            if k > 0 {
                write!(f, " | ")?;
            }
            write!(f, "P{}: {}", k, tube)?;
        }
        Ok(())
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.debug_struct("State")
            .field("capacity", &self.capacity())
            .field("tubes", &self.notation())
            .finish()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "P{}->P{}", self.from, self.to)
    }
}
