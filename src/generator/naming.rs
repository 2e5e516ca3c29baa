use crate::config::Config;

pub fn convert<F: NamingConvention, T: NamingConvention>(source: &str) -> String {
    T::concatenate(&F::split(source))
}

pub trait NamingConvention {
    fn split(name: &str) -> Vec<&str>;
    fn concatenate(words: &[&str]) -> String;
}

/// `SAMPLE_COUNT_4_BIT`; the style of raw constants and enum prefixes.
pub struct ScreamingSnakeCase;

impl NamingConvention for ScreamingSnakeCase {
    fn split(name: &str) -> Vec<&str> {
        name.split('_').filter(|w| !w.is_empty()).collect()
    }

    fn concatenate(words: &[&str]) -> String {
        words
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("_")
    }
}

/// `SampleCountFlagBits`; the style of type names and enumerator names.
pub struct PascalCase;

impl PascalCase {
    fn push_word(result: &mut String, word: &str) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            first.to_uppercase().for_each(|c| result.push(c));
            chars
                .flat_map(|c| c.to_lowercase())
                .for_each(|c| result.push(c));
        }
    }
}

impl NamingConvention for PascalCase {
    /// Every uppercase character that does not start the current word starts a new one, so runs
    /// of capitals become one word per letter (`KHR` -> `K`, `H`, `R`). Joining the words gives
    /// back the input.
    fn split(name: &str) -> Vec<&str> {
        let mut words = Vec::new();
        let mut start = 0;
        for (i, c) in name.char_indices() {
            if c.is_uppercase() && i != start {
                words.push(&name[start..i]);
                start = i;
            }
        }
        if start < name.len() {
            words.push(&name[start..]);
        }
        words
    }

    fn concatenate(words: &[&str]) -> String {
        let mut result = String::new();
        for word in words {
            Self::push_word(&mut result, word);
        }
        result
    }
}

/// Split a PascalCase type name into the chunks the prefix resolver scans.
pub fn segment(name: &str) -> Vec<&str> {
    PascalCase::split(name)
}

fn strip_word_prefix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    name.strip_prefix(prefix)
        .filter(|rest| rest.is_empty() || rest.starts_with('_'))
}

/// Turn a noise-stripped raw constant into a PascalCase name.
///
/// The leading `<prefix>_`, or failing that `<namespace>_<prefix>_`, or failing that
/// `<namespace>_`, is removed and the remaining words are concatenated. Vendor tags keep their
/// case. A constant that consists of nothing but the prefix keeps all its words.
pub fn pretty_name(constant: &str, prefix: &str, config: &Config) -> String {
    let namespaced_prefix = format!("{}_{}", config.namespace, prefix);
    let tail = strip_word_prefix(constant, prefix)
        .or_else(|| strip_word_prefix(constant, &namespaced_prefix))
        .or_else(|| strip_word_prefix(constant, &config.namespace))
        .unwrap_or(constant);

    let mut words = ScreamingSnakeCase::split(tail);
    if words.is_empty() {
        words = ScreamingSnakeCase::split(constant);
    }

    let mut result = String::new();
    for word in words {
        if config.is_vendor_tag(word) {
            result.push_str(word);
        } else {
            PascalCase::push_word(&mut result, word);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_splits_correctly() {
        assert_eq!(
            PascalCase::split("SampleCountFlagBits"),
            vec!["Sample", "Count", "Flag", "Bits"]
        );
    }

    #[test]
    fn pascal_case_split_isolates_acronym_letters() {
        assert_eq!(
            PascalCase::split("SurfaceTransformFlagBitsKHR"),
            vec!["Surface", "Transform", "Flag", "Bits", "K", "H", "R"]
        );
    }

    #[test]
    fn pascal_case_split_keeps_digits_with_their_word() {
        assert_eq!(
            PascalCase::split("AccessFlags2"),
            vec!["Access", "Flags2"]
        );
    }

    #[test]
    fn pascal_case_split_edge_cases() {
        assert!(PascalCase::split("").is_empty());
        assert_eq!(PascalCase::split("A"), vec!["A"]);
        assert_eq!(PascalCase::split("inI"), vec!["in", "I"]);
        assert_eq!(PascalCase::split("lower"), vec!["lower"]);
    }

    #[test]
    fn pascal_case_split_roundtrip() {
        for source in [
            "SampleCountFlagBits",
            "PresentModeKHR",
            "DebugReportObjectTypeEXT",
            "IndirectCommandsTokenTypeNVX",
            "X",
        ] {
            assert_eq!(segment(source).concat(), source);
        }
    }

    #[test]
    fn pascal_case_concat_works() {
        let name = PascalCase::concatenate(&["HElLo", "wOrLd"]);
        assert_eq!(name, "HelloWorld")
    }

    #[test]
    fn screaming_snake_case_roundtrip() {
        let source = "SAMPLE_COUNT";
        let words = ScreamingSnakeCase::split(source);
        assert_eq!(words, vec!["SAMPLE", "COUNT"]);
        assert_eq!(ScreamingSnakeCase::concatenate(&words), source);
    }

    #[test]
    fn screaming_snake_case_drops_empty_words() {
        assert_eq!(
            ScreamingSnakeCase::split("_CULL_MODE_FRONT_"),
            vec!["CULL", "MODE", "FRONT"]
        );
    }

    #[test]
    fn convert_between_conventions() {
        assert_eq!(
            convert::<ScreamingSnakeCase, PascalCase>("FRONT_AND_BACK"),
            "FrontAndBack"
        );
        assert_eq!(
            convert::<PascalCase, ScreamingSnakeCase>("ImageLayout"),
            "IMAGE_LAYOUT"
        );
    }

    #[test]
    fn pretty_name_strips_namespaced_prefix() {
        let config = Config::default();
        assert_eq!(
            pretty_name("VK_IMAGE_LAYOUT_GENERAL", "IMAGE_LAYOUT", &config),
            "General"
        );
        assert_eq!(
            pretty_name("VK_CULL_MODE_FRONT_", "CULL_MODE", &config),
            "Front"
        );
    }

    #[test]
    fn pretty_name_strips_bare_prefix() {
        let config = Config::default();
        assert_eq!(
            pretty_name("VK_ERROR_OUT_OF_HOST_MEMORY", "VK", &config),
            "ErrorOutOfHostMemory"
        );
    }

    #[test]
    fn pretty_name_only_strips_whole_words() {
        let config = Config::default();
        assert_eq!(
            pretty_name("VK_IMAGE_LAYOUTS_GENERAL", "IMAGE_LAYOUT", &config),
            "ImageLayoutsGeneral"
        );
    }

    #[test]
    fn pretty_name_keeps_vendor_tags() {
        let config = Config::default();
        assert_eq!(
            pretty_name("VK_PRESENT_MODE_FIFO_RELAXED_KHR", "PRESENT_MODE", &config),
            "FifoRelaxedKHR"
        );
    }

    #[test]
    fn pretty_name_of_bare_prefix_keeps_all_words() {
        let config = Config::default();
        assert_eq!(pretty_name("VK_SHADER", "VK_SHADER", &config), "VkShader");
    }
}
