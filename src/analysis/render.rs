//! Finding message rendering.
//!
//! Most findings render straight from their catalog template. A few
//! splice in values from the folded options: the duplicate and
//! unrecognized lists, and the metaspace arithmetic, which rewrites the
//! formula inside its template with the sizes actually in play.

use crate::analysis::catalog::FindingId;
use crate::category::Category;
use crate::defaults;
use crate::options::JvmOptions;
use crate::units;

/// Render the advisory text for one finding.
///
/// `fired` is the full finding set from the same run; the metaspace
/// breakdown reads it to know whether the shrunken-space arithmetic
/// applies.
pub(crate) fn message(id: FindingId, options: &JvmOptions, fired: &[FindingId]) -> String {
    match id {
        FindingId::OptsUndefined => with_tokens(id, options.undefined()),
        FindingId::ExperimentalVmOptionsEnabled => with_tokens(id, options.experimental()),
        FindingId::DiagnosticVmOptionsEnabled => with_tokens(id, options.diagnostic()),
        FindingId::DuplicateOptions => {
            with_list(id, options.duplicates())
        }
        FindingId::UnaccountedOptionsDisabled => {
            with_list(id, options.unaccounted_disabled_options())
        }
        FindingId::MetaspaceClassMetadataAndCompClassSpace => metaspace_breakdown(options, fired),
        FindingId::MetaspaceLtCompClass => metaspace_too_small(options),
        _ => id.template().to_string(),
    }
}

fn with_tokens(id: FindingId, tokens: &[String]) -> String {
    let mut message = id.template().to_string();
    for token in tokens {
        message.push(' ');
        message.push_str(token);
    }
    message.push('.');
    message
}

fn with_list(id: FindingId, list: Option<String>) -> String {
    let mut message = id.template().to_string();
    message.push_str(&list.unwrap_or_default());
    message.push('.');
    message
}

/// Splice the actual sizes into `Metaspace = Class Metadata +
/// Compressed Class Space`. Without a max metaspace size both the total
/// and the class metadata share are unlimited. When the run also found
/// the max smaller than the class space, the class space shown is the
/// shrunken one the JVM derives.
fn metaspace_breakdown(options: &JvmOptions, fired: &[FindingId]) -> String {
    let max_metaspace = options
        .bytes(Category::MaxMetaspaceSize)
        .map(|bytes| bytes as i64);
    let class_space = match max_metaspace {
        Some(max) if fired.contains(&FindingId::MetaspaceLtCompClass) => {
            max - 2 * boot_metaspace(options)
        }
        _ => options
            .bytes(Category::CompressedClassSpaceSize)
            .map_or(defaults::COMPRESSED_CLASS_SPACE_SIZE as i64, |bytes| {
                bytes as i64
            }),
    };
    let replacement = format!(
        "Metaspace({}) = Class Metadata({}) + Compressed Class Space({}M)",
        display_or_unlimited(max_metaspace),
        display_or_unlimited(max_metaspace.map(|max| max - class_space)),
        units::display_mb(class_space)
    );
    FindingId::MetaspaceClassMetadataAndCompClassSpace
        .template()
        .replacen(
            "Metaspace = Class Metadata + Compressed Class Space",
            &replacement,
            1,
        )
}

/// Splice the actual sizes into the shrunken-space formulas. The
/// derived class space is the max metaspace less twice the boot class
/// loader allocation, leaving that doubled allocation as the class
/// metadata share.
fn metaspace_too_small(options: &JvmOptions) -> String {
    let template = FindingId::MetaspaceLtCompClass.template();
    let max_metaspace = match options.bytes(Category::MaxMetaspaceSize) {
        Some(bytes) => bytes as i64,
        None => return template.to_string(),
    };
    let boot = boot_metaspace(options);
    let class_space = max_metaspace - 2 * boot;
    let class_metadata = max_metaspace - class_space;
    template
        .replacen(
            "CompressedClassSpaceSize' = MaxMetaspaceSize - \
             [2 * InitialBootClassLoaderMetaspaceSize]",
            &format!(
                "CompressedClassSpaceSize' = MaxMetaspaceSize({}M) - \
                 [2 * InitialBootClassLoaderMetaspaceSize({}M)] = {}M",
                units::display_mb(max_metaspace),
                units::display_mb(boot),
                units::display_mb(class_space)
            ),
            1,
        )
        .replacen(
            "Class Metadata Size' = MaxMetaspaceSize - CompressedClassSpaceSize'",
            &format!(
                "Class Metadata Size' = MaxMetaspaceSize({}M) - \
                 CompressedClassSpaceSize'({}M) = {}M",
                units::display_mb(max_metaspace),
                units::display_mb(class_space),
                units::display_mb(class_metadata)
            ),
            1,
        )
}

fn boot_metaspace(options: &JvmOptions) -> i64 {
    options
        .bytes(Category::InitialBootClassLoaderMetaspaceSize)
        .map_or(
            defaults::INITIAL_BOOT_CLASS_LOADER_METASPACE_SIZE as i64,
            |bytes| bytes as i64,
        )
}

fn display_or_unlimited(bytes: Option<i64>) -> String {
    bytes.map_or_else(
        || "unlimited".to_string(),
        |bytes| format!("{}M", units::display_mb(bytes)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_findings_render_their_template() {
        let options = JvmOptions::parse("-verbose:class");
        assert_eq!(
            message(FindingId::VerboseClass, &options, &[]),
            FindingId::VerboseClass.template()
        );
    }

    #[test]
    fn unrecognized_options_are_listed() {
        let options = JvmOptions::parse("-XX:FooBar -XX:BazQux=1");
        let rendered = message(FindingId::OptsUndefined, &options, &[]);
        assert_eq!(rendered, "Unrecognized JVM options: -XX:FooBar -XX:BazQux=1.");
    }

    #[test]
    fn duplicate_options_are_listed() {
        let options = JvmOptions::parse("-Xmx1g -Xms512m -Xmx2g");
        let rendered = message(FindingId::DuplicateOptions, &options, &[]);
        assert_eq!(rendered, "Duplicate JVM options: -Xmx1g -Xmx2g.");
    }

    #[test]
    fn metaspace_breakdown_with_explicit_sizes() {
        let options = JvmOptions::parse("-XX:MaxMetaspaceSize=2g");
        let rendered = message(
            FindingId::MetaspaceClassMetadataAndCompClassSpace,
            &options,
            &[],
        );
        assert!(rendered.ends_with(
            "Metaspace(2048M) = Class Metadata(1024M) + Compressed Class Space(1024M)."
        ));
    }

    #[test]
    fn metaspace_breakdown_unlimited() {
        let options = JvmOptions::parse("-Xmx1g");
        let rendered = message(
            FindingId::MetaspaceClassMetadataAndCompClassSpace,
            &options,
            &[],
        );
        assert!(rendered.ends_with(
            "Metaspace(unlimited) = Class Metadata(unlimited) + \
             Compressed Class Space(1024M)."
        ));
    }

    #[test]
    fn metaspace_breakdown_with_shrunken_class_space() {
        let options = JvmOptions::parse("-XX:MaxMetaspaceSize=256m");
        let fired = [FindingId::MetaspaceLtCompClass];
        let rendered = message(
            FindingId::MetaspaceClassMetadataAndCompClassSpace,
            &options,
            &fired,
        );
        assert!(rendered.ends_with(
            "Metaspace(256M) = Class Metadata(8M) + Compressed Class Space(248M)."
        ));
    }

    #[test]
    fn metaspace_too_small_formulas() {
        let options = JvmOptions::parse("-XX:MaxMetaspaceSize=256m");
        let rendered = message(FindingId::MetaspaceLtCompClass, &options, &[]);
        assert!(rendered.contains(
            "CompressedClassSpaceSize' = MaxMetaspaceSize(256M) - \
             [2 * InitialBootClassLoaderMetaspaceSize(4M)] = 248M."
        ));
        assert!(rendered.contains(
            "Class Metadata Size' = MaxMetaspaceSize(256M) - \
             CompressedClassSpaceSize'(248M) = 8M."
        ));
    }

    #[test]
    fn metaspace_too_small_goes_negative_on_a_tiny_max() {
        let options = JvmOptions::parse("-XX:MaxMetaspaceSize=1m");
        let rendered = message(FindingId::MetaspaceLtCompClass, &options, &[]);
        assert!(rendered.contains("= -7M."));
    }
}
