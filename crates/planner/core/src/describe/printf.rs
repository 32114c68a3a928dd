//! Positional printf-style formatting over numeric arguments.
//!
//! Supported conversions: `%d` `%i` `%u` (integer, value rounded to nearest),
//! `%f` `%F` (fixed point, default precision 6), `%s` (shortest display) and
//! `%%`. Flags `-` `+` `0` space `#`, a width, and a `.precision` are honoured.
//!
//! Placeholders left without an argument, unknown conversions, and a trailing
//! lone `%` are copied to the output unchanged. Surplus arguments are ignored.
//! A width or precision above `MAX_FIELD` is also copied unchanged; it still
//! consumes its argument so later placeholders keep their positions.

const FLAGS: &[char] = &['-', '+', ' ', '0', '#'];

/// Largest width or precision rendered.
const MAX_FIELD: usize = 64;

#[derive(Clone, Copy, Debug, Default)]
struct FormatSpec {
    left_align: bool,
    plus_sign: bool,
    space_sign: bool,
    zero_pad: bool,
    alternate: bool,
    width: usize,
    precision: Option<usize>,
}

impl FormatSpec {
    fn is_oversized(&self) -> bool {
        self.width > MAX_FIELD || self.precision.is_some_and(|precision| precision > MAX_FIELD)
    }
}

/// Formats `template`, substituting `args` into placeholders left to right.
pub fn sprintf(template: &str, args: &[f64]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 4);
    let mut args = args.iter().copied();
    let mut rest = template;

    while let Some(percent) = rest.find('%') {
        out.push_str(&rest[..percent]);
        let directive = &rest[percent..];

        let Some((spec, conversion, len)) = parse_directive(directive) else {
            // Dangling `%` at the end of the template
            out.push_str(directive);
            return out;
        };
        let literal = &directive[..len];
        rest = &directive[len..];

        match conversion {
            '%' => out.push('%'),
            'd' | 'i' | 'u' | 'f' | 'F' | 's' => match args.next() {
                Some(_) if spec.is_oversized() => out.push_str(literal),
                Some(value) => out.push_str(&render(&spec, conversion, value)),
                None => out.push_str(literal),
            },
            _ => out.push_str(literal),
        }
    }

    out.push_str(rest);
    out
}

/// Parses `%[flags][width][.precision]conversion` at the start of `directive`.
///
/// Returns the spec, the conversion character, and the byte length consumed.
fn parse_directive(directive: &str) -> Option<(FormatSpec, char, usize)> {
    let mut spec = FormatSpec::default();
    let mut chars = directive.char_indices().skip(1).peekable();

    while let Some(&(_, c)) = chars.peek() {
        if !FLAGS.contains(&c) {
            break;
        }
        match c {
            '-' => spec.left_align = true,
            '+' => spec.plus_sign = true,
            ' ' => spec.space_sign = true,
            '0' => spec.zero_pad = true,
            _ => spec.alternate = true,
        }
        chars.next();
    }

    spec.width = take_number(&mut chars).unwrap_or(0);

    if let Some(&(_, '.')) = chars.peek() {
        chars.next();
        // `%.f` means precision zero
        spec.precision = Some(take_number(&mut chars).unwrap_or(0));
    }

    let (index, conversion) = chars.next()?;
    Some((spec, conversion, index + conversion.len_utf8()))
}

fn take_number<I>(chars: &mut std::iter::Peekable<I>) -> Option<usize>
where
    I: Iterator<Item = (usize, char)>,
{
    let mut number: Option<usize> = None;
    while let Some(&(_, c)) = chars.peek() {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        number = Some(
            number
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
        chars.next();
    }
    number
}

/// Renders one value. Integer conversions round to nearest rather than
/// truncate, so `28.999999999999996` prints as `29`.
fn render(spec: &FormatSpec, conversion: char, value: f64) -> String {
    match conversion {
        'd' | 'i' | 'u' => {
            let rounded = value.round();
            let digits = format!(
                "{:0>min_digits$.0}",
                rounded.abs(),
                min_digits = spec.precision.unwrap_or(0)
            );
            pad_numeric(spec, rounded < 0.0, digits)
        }
        'f' | 'F' => {
            let precision = spec.precision.unwrap_or(6);
            let mut digits = format!("{:.*}", precision, value.abs());
            if precision == 0 && spec.alternate {
                digits.push('.');
            }
            pad_numeric(spec, value < 0.0, digits)
        }
        _ => {
            let mut text = display_number(value);
            if let Some(max_chars) = spec.precision {
                text = text.chars().take(max_chars).collect();
            }
            pad(spec, text)
        }
    }
}

/// Shortest human display: integral values print without a fraction.
fn display_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn pad_numeric(spec: &FormatSpec, negative: bool, digits: String) -> String {
    let sign = if negative {
        "-"
    } else if spec.plus_sign {
        "+"
    } else if spec.space_sign {
        " "
    } else {
        ""
    };

    let len = sign.len() + digits.len();
    if spec.zero_pad && !spec.left_align && len < spec.width {
        let zeros = "0".repeat(spec.width - len);
        return format!("{sign}{zeros}{digits}");
    }
    pad(spec, format!("{sign}{digits}"))
}

fn pad(spec: &FormatSpec, text: String) -> String {
    let len = text.chars().count();
    if len >= spec.width {
        return text;
    }
    let fill = " ".repeat(spec.width - len);
    if spec.left_align {
        text + &fill
    } else {
        fill + &text
    }
}
