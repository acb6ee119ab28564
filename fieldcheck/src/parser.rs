use crate::error::SyntaxError;

/// Parsed form of one annotation: rule name mapped to its arguments.
///
/// Backed by a vec in insertion order so that rule evaluation is
/// deterministic; annotations hold at most a handful of rules, so linear
/// lookup is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<(String, Vec<String>)>,
}

impl RuleSet {
    fn push(&mut self, name: &str, arg: &str) {
        if let Some((_, args)) = self.rules.iter_mut().find(|(n, _)| n == name) {
            args.push(arg.to_string());
        } else {
            self.rules.push((name.to_string(), vec![arg.to_string()]));
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.rules
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, args)| args.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.rules.iter().map(|(n, args)| (n.as_str(), args.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Parses a raw annotation into a [`RuleSet`].
///
/// The annotation is split on commas. The first segment must be `name:arg`
/// with both parts non-empty. What happens to the remaining segments depends
/// on the rule name:
///
/// - `min` / `max`: each later `key:value` segment folds its value under
///   `key`, letting a single tag carry both bounds (`"min:3,max:10"`);
///   segments not of that form are ignored.
/// - `in`: each later segment is a further allowed literal
///   (`"in:foo,bar"` allows `foo` and `bar`).
/// - anything else: later segments are ignored.
///
/// # Examples
///
/// ```
/// use fieldcheck::parse;
///
/// let rules = parse("min:3,max:10").unwrap();
/// assert_eq!(rules.get("min"), Some(&["3".to_string()][..]));
/// assert_eq!(rules.get("max"), Some(&["10".to_string()][..]));
/// ```
pub fn parse(annotation: &str) -> Result<RuleSet, SyntaxError> {
    let mut segments = annotation.split(',');
    // split always yields at least one segment, even for the empty string
    let head = segments.next().unwrap_or_default();
    let (name, arg) = match head.split_once(':') {
        Some((name, arg)) if !name.is_empty() && !arg.is_empty() && !arg.contains(':') => {
            (name, arg)
        }
        _ => return Err(SyntaxError::MalformedSegment(head.to_string())),
    };

    let mut rules = RuleSet::default();
    match name {
        "min" | "max" => {
            for segment in segments {
                if let Some((key, value)) = segment.split_once(':') {
                    if !value.contains(':') {
                        rules.push(key, value);
                    }
                }
            }
            rules.push(name, arg);
        }
        "in" => {
            rules.push(name, arg);
            for segment in segments {
                rules.push(name, segment);
            }
        }
        _ => rules.push(name, arg),
    }
    Ok(rules)
}
