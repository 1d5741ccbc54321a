//! Per-language lexical profiles.
//!
//! A profile is plain static data: keyword sets, delimiter rules and
//! character classes. The tokenizer reads nothing else, so adding a language
//! means adding a profile here and signatures in [`crate::detect`].

use crate::Language;

/// How a quote character inside a string is escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// `\"` consumes the following character.
    Backslash,
    /// `''` inside a `'`-string stands for one quote (SQL).
    DoubledQuote,
}

/// Top-level scanning mode of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Identifier/keyword languages.
    Code,
    /// Tag-based markup (HTML, XML).
    Markup,
    /// Selector/declaration blocks (CSS).
    StyleSheet,
}

/// Static configuration driving the tokenizer for one language.
#[derive(Debug)]
pub struct LexicalProfile {
    pub language: Language,
    pub mode: Mode,
    pub keywords: &'static [&'static str],
    pub case_insensitive_keywords: bool,
    /// Keywords whose following identifier names a type.
    pub class_keywords: &'static [&'static str],
    /// Keywords whose following identifier names a function.
    pub function_keywords: &'static [&'static str],
    /// Builtin type names, classified as `class`.
    pub types: &'static [&'static str],
    /// Whether identifiers are classified at all (off for the generic profile).
    pub classify_identifiers: bool,
    pub line_comments: &'static [&'static str],
    pub block_comment: Option<(&'static str, &'static str)>,
    pub nested_comments: bool,
    pub single_quote_strings: bool,
    pub double_quote_strings: bool,
    /// Backtick-delimited strings (JS templates, Go raw strings, shell).
    pub template_strings: bool,
    /// Whether backslash escapes apply inside backtick strings.
    pub template_escapes: bool,
    /// Whether backslash escapes apply inside single-quoted strings.
    pub single_quote_escapes: bool,
    pub triple_quote_strings: bool,
    pub escape: Escape,
    /// Identifier prefixes that glue onto a following quote (`f"..."`).
    pub string_prefixes: &'static [&'static str],
    /// Rust-style `r#"..."#` raw strings.
    pub raw_strings: bool,
    /// Characters allowed inside identifiers besides alphanumerics and `_`.
    pub identifier_extras: &'static str,
    pub variable_sigil: Option<char>,
    /// `@Name` annotations and decorators.
    pub annotations: bool,
    /// `#[...]` attributes.
    pub bracket_attributes: bool,
    /// `name!` macro invocations.
    pub macros: bool,
    /// `'a` lifetimes.
    pub lifetimes: bool,
    /// Identifiers or strings followed by `:` are keys (JSON, YAML).
    pub key_values: bool,
    /// `<?php` and `?>` are tag delimiters.
    pub php_tags: bool,
    pub operators: &'static str,
    pub punctuation: &'static str,
}

impl LexicalProfile {
    pub fn is_keyword(&self, word: &str) -> bool {
        if self.case_insensitive_keywords {
            self.keywords.iter().any(|k| k.eq_ignore_ascii_case(word))
        } else {
            self.keywords.contains(&word)
        }
    }

    pub fn is_type(&self, word: &str) -> bool {
        self.types.contains(&word)
    }

    pub fn introduces_class(&self, word: &str) -> bool {
        self.class_keywords.iter().any(|k| self.keyword_eq(k, word))
    }

    pub fn introduces_function(&self, word: &str) -> bool {
        self.function_keywords.iter().any(|k| self.keyword_eq(k, word))
    }

    pub fn is_operator(&self, c: char) -> bool {
        self.operators.contains(c)
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(c)
    }

    pub fn is_identifier_start(&self, c: char) -> bool {
        c.is_alphabetic() || c == '_' || (c == '$' && self.identifier_extras.contains('$'))
    }

    pub fn is_identifier_char(&self, c: char) -> bool {
        c.is_alphanumeric() || c == '_' || self.identifier_extras.contains(c)
    }

    fn keyword_eq(&self, keyword: &str, word: &str) -> bool {
        if self.case_insensitive_keywords {
            keyword.eq_ignore_ascii_case(word)
        } else {
            keyword == word
        }
    }
}

/// Returns the profile for a language.
pub fn profile(language: Language) -> &'static LexicalProfile {
    match language {
        Language::Plaintext => &GENERIC,
        Language::Json => &JSON,
        Language::JavaScript => &JAVASCRIPT,
        Language::TypeScript => &TYPESCRIPT,
        Language::Python => &PYTHON,
        Language::Rust => &RUST,
        Language::Dart => &DART,
        Language::Html => &HTML,
        Language::Xml => &XML,
        Language::Css => &CSS,
        Language::Java => &JAVA,
        Language::Kotlin => &KOTLIN,
        Language::C => &C,
        Language::Cpp => &CPP,
        Language::CSharp => &CSHARP,
        Language::Go => &GO,
        Language::Php => &PHP,
        Language::Ruby => &RUBY,
        Language::Shell => &SHELL,
        Language::Sql => &SQL,
        Language::Yaml => &YAML,
        Language::Swift => &SWIFT,
    }
}

const C_OPERATORS: &str = "=!<>+-*/%&|^~?";
const C_PUNCTUATION: &str = "(){}[];,.:";

/// Baseline for C-family profiles; also the minimal generic profile.
const BASE: LexicalProfile = LexicalProfile {
    language: Language::Plaintext,
    mode: Mode::Code,
    keywords: &[],
    case_insensitive_keywords: false,
    class_keywords: &[],
    function_keywords: &[],
    types: &[],
    classify_identifiers: true,
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_comments: false,
    single_quote_strings: true,
    double_quote_strings: true,
    template_strings: false,
    template_escapes: true,
    single_quote_escapes: true,
    triple_quote_strings: false,
    escape: Escape::Backslash,
    string_prefixes: &[],
    raw_strings: false,
    identifier_extras: "",
    variable_sigil: None,
    annotations: false,
    bracket_attributes: false,
    macros: false,
    lifetimes: false,
    key_values: false,
    php_tags: false,
    operators: C_OPERATORS,
    punctuation: C_PUNCTUATION,
};

/// Strings, numbers and the most common comment conventions only.
static GENERIC: LexicalProfile = LexicalProfile {
    classify_identifiers: false,
    line_comments: &["//", "#"],
    operators: "",
    punctuation: "",
    ..BASE
};

static JSON: LexicalProfile = LexicalProfile {
    language: Language::Json,
    keywords: &["true", "false", "null"],
    line_comments: &["//"],
    single_quote_strings: false,
    key_values: true,
    operators: "-",
    punctuation: "{}[],:",
    ..BASE
};

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "export", "extends",
    "finally", "for", "from", "function", "if", "import", "in", "instanceof",
    "let", "new", "of", "return", "static", "super", "switch", "this", "throw",
    "try", "typeof", "var", "void", "while", "with", "yield", "true", "false", "null", "undefined", "NaN", "Infinity",
];

const JS_TYPES: &[&str] = &[
    "Array", "Object", "String", "Number", "Boolean", "Function", "Symbol",
    "BigInt", "Map", "Set", "WeakMap", "WeakSet", "Promise", "Proxy",
    "Reflect", "RegExp", "Error", "TypeError", "RangeError", "Date", "JSON",
    "Math", "Intl", "ArrayBuffer", "Uint8Array",
];

static JAVASCRIPT: LexicalProfile = LexicalProfile {
    language: Language::JavaScript,
    keywords: JS_KEYWORDS,
    class_keywords: &["class", "extends", "new"],
    function_keywords: &["function"],
    types: JS_TYPES,
    template_strings: true,
    identifier_extras: "$",
    annotations: true,
    ..BASE
};

static TYPESCRIPT: LexicalProfile = LexicalProfile {
    language: Language::TypeScript,
    keywords: &[
        "async", "await", "break", "case", "catch", "class", "const", "continue",
        "debugger", "default", "delete", "do", "else", "enum", "export", "extends",
        "finally", "for", "from", "function", "if", "implements", "import", "in",
        "instanceof", "interface", "let", "new", "of", "return", "static", "super",
        "switch", "this", "throw", "try", "typeof", "var", "void", "while", "with",
        "yield", "abstract", "as", "declare", "keyof", "namespace", "private",
        "protected", "public", "readonly", "type", "satisfies", "true", "false",
        "null", "undefined",
    ],
    class_keywords: &["class", "extends", "implements", "interface", "type", "enum", "new"],
    function_keywords: &["function"],
    types: &[
        "string", "number", "boolean", "any", "unknown", "never", "object",
        "symbol", "bigint", "Array", "Promise", "Record", "Partial", "Readonly",
        "Map", "Set", "Error",
    ],
    template_strings: true,
    identifier_extras: "$",
    annotations: true,
    ..BASE
};

static PYTHON: LexicalProfile = LexicalProfile {
    language: Language::Python,
    keywords: &[
        "and", "as", "assert", "async", "await", "break", "class", "continue",
        "def", "del", "elif", "else", "except", "finally", "for", "from",
        "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or",
        "pass", "raise", "return", "try", "while", "with", "yield", "match",
        "case", "True", "False", "None", "self",
    ],
    class_keywords: &["class"],
    function_keywords: &["def"],
    types: &[
        "int", "float", "str", "bool", "list", "dict", "tuple", "set",
        "frozenset", "bytes", "bytearray", "object", "type", "Exception",
    ],
    line_comments: &["#"],
    block_comment: None,
    triple_quote_strings: true,
    string_prefixes: &["r", "b", "f", "u", "rb", "br", "fr", "rf", "R", "B", "F", "U"],
    annotations: true,
    operators: "=!<>+-*/%&|^~@",
    ..BASE
};

static RUST: LexicalProfile = LexicalProfile {
    language: Language::Rust,
    keywords: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn",
        "else", "enum", "extern", "fn", "for", "if", "impl", "in", "let", "loop",
        "match", "mod", "move", "mut", "pub", "ref", "return", "self", "Self",
        "static", "struct", "super", "trait", "type", "union", "unsafe", "use",
        "where", "while", "yield", "true", "false",
    ],
    class_keywords: &["struct", "enum", "trait", "type", "impl", "union"],
    function_keywords: &["fn"],
    types: &[
        "bool", "char", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize",
        "str", "u8", "u16", "u32", "u64", "u128", "usize", "String", "Vec",
        "Option", "Result", "Box", "Rc", "Arc", "HashMap", "HashSet", "BTreeMap",
        "Cow", "RefCell", "Mutex", "Some", "None", "Ok", "Err",
    ],
    nested_comments: true,
    string_prefixes: &["b", "c"],
    raw_strings: true,
    bracket_attributes: true,
    macros: true,
    lifetimes: true,
    ..BASE
};

static DART: LexicalProfile = LexicalProfile {
    language: Language::Dart,
    keywords: &[
        "abstract", "as", "assert", "async", "await", "break", "case", "catch",
        "class", "const", "continue", "covariant", "default", "deferred", "do",
        "dynamic", "else", "enum", "export", "extends", "extension", "external",
        "factory", "final", "finally", "for", "get", "if", "implements", "import",
        "in", "is", "late", "library", "mixin", "new", "on", "operator", "part",
        "required", "rethrow", "return", "sealed", "set", "static", "super",
        "switch", "sync", "this", "throw", "try", "typedef", "var", "void",
        "while", "with", "yield", "true", "false", "null",
    ],
    class_keywords: &["class", "extends", "implements", "with", "mixin", "enum", "new", "on"],
    types: &[
        "int", "double", "num", "String", "bool", "List", "Map", "Set", "Future",
        "Stream", "Object", "Iterable", "Widget", "BuildContext", "State",
    ],
    triple_quote_strings: true,
    string_prefixes: &["r"],
    identifier_extras: "$",
    annotations: true,
    ..BASE
};

const MARKUP: LexicalProfile = LexicalProfile {
    language: Language::Html,
    mode: Mode::Markup,
    line_comments: &[],
    block_comment: Some(("<!--", "-->")),
    identifier_extras: "-:.",
    operators: "=",
    punctuation: "",
    ..BASE
};

static HTML: LexicalProfile = MARKUP;

static XML: LexicalProfile = LexicalProfile {
    language: Language::Xml,
    ..MARKUP
};

static CSS: LexicalProfile = LexicalProfile {
    language: Language::Css,
    mode: Mode::StyleSheet,
    keywords: &[
        "important", "inherit", "initial", "unset", "revert", "auto", "none",
        "and", "not", "only",
    ],
    line_comments: &[],
    identifier_extras: "-",
    operators: ">+~*=-",
    punctuation: "{}()[];,:",
    ..BASE
};

static JAVA: LexicalProfile = LexicalProfile {
    language: Language::Java,
    keywords: &[
        "abstract", "assert", "break", "case", "catch", "class", "const",
        "continue", "default", "do", "else", "enum", "extends", "final",
        "finally", "for", "goto", "if", "implements", "import", "instanceof",
        "interface", "native", "new", "package", "private", "protected",
        "public", "record", "return", "sealed", "permits", "static", "strictfp",
        "super", "switch", "synchronized", "this", "throw", "throws",
        "transient", "try", "var", "void", "volatile", "while", "yield",
        "true", "false", "null",
    ],
    class_keywords: &["class", "interface", "enum", "record", "extends", "implements", "new"],
    types: &[
        "boolean", "byte", "char", "double", "float", "int", "long", "short",
        "String", "Integer", "Long", "Double", "Boolean", "Object", "List",
        "ArrayList", "Map", "HashMap", "Set", "Optional", "Exception",
    ],
    annotations: true,
    operators: "=!<>+-*/%&|^~?",
    ..BASE
};

static KOTLIN: LexicalProfile = LexicalProfile {
    language: Language::Kotlin,
    keywords: &[
        "abstract", "annotation", "as", "break", "by", "catch", "class",
        "companion", "const", "constructor", "continue", "data", "do", "else",
        "enum", "final", "finally", "for", "fun", "if", "import", "in", "infix",
        "init", "inline", "inner", "interface", "internal", "is", "lateinit",
        "object", "open", "operator", "out", "override", "package", "private",
        "protected", "public", "return", "sealed", "super", "suspend", "this",
        "throw", "try", "typealias", "val", "var", "when", "where", "while",
        "true", "false", "null",
    ],
    class_keywords: &["class", "interface", "object", "typealias"],
    function_keywords: &["fun"],
    types: &[
        "Int", "Long", "Short", "Byte", "Float", "Double", "Char", "Boolean",
        "String", "Any", "Unit", "Nothing", "List", "Map", "Set", "Array",
    ],
    template_strings: false,
    triple_quote_strings: true,
    annotations: true,
    ..BASE
};

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "const", "continue", "default", "do", "else",
    "enum", "extern", "for", "goto", "if", "inline", "register", "restrict",
    "return", "sizeof", "static", "struct", "switch", "typedef", "union",
    "volatile", "while", "NULL", "true", "false",
];

const C_TYPES: &[&str] = &[
    "char", "short", "int", "long", "float", "double", "void", "signed",
    "unsigned", "bool", "size_t", "ssize_t", "int8_t", "int16_t", "int32_t",
    "int64_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t", "FILE",
];

static C: LexicalProfile = LexicalProfile {
    language: Language::C,
    keywords: C_KEYWORDS,
    class_keywords: &["struct", "union", "enum"],
    types: C_TYPES,
    ..BASE
};

static CPP: LexicalProfile = LexicalProfile {
    language: Language::Cpp,
    keywords: &[
        "alignas", "alignof", "auto", "break", "case", "catch", "class",
        "concept", "const", "consteval", "constexpr", "const_cast", "continue",
        "co_await", "co_return", "co_yield", "decltype", "default", "delete",
        "do", "dynamic_cast", "else", "enum", "explicit", "export", "extern",
        "final", "for", "friend", "goto", "if", "inline", "mutable", "namespace",
        "new", "noexcept", "nullptr", "operator", "override", "private",
        "protected", "public", "reinterpret_cast", "requires", "return",
        "sizeof", "static", "static_assert", "static_cast", "struct", "switch",
        "template", "this", "thread_local", "throw", "try", "typedef", "typeid",
        "typename", "union", "using", "virtual", "volatile", "while", "true",
        "false", "NULL",
    ],
    class_keywords: &["class", "struct", "union", "enum", "namespace", "new"],
    types: &[
        "bool", "char", "short", "int", "long", "float", "double", "void",
        "signed", "unsigned", "wchar_t", "size_t", "string", "vector", "map",
        "set", "unordered_map", "shared_ptr", "unique_ptr", "optional", "std",
    ],
    ..BASE
};

static CSHARP: LexicalProfile = LexicalProfile {
    language: Language::CSharp,
    keywords: &[
        "abstract", "as", "async", "await", "base", "break", "case", "catch",
        "checked", "class", "const", "continue", "default", "delegate", "do",
        "else", "enum", "event", "explicit", "extern", "finally", "fixed", "for",
        "foreach", "get", "goto", "if", "implicit", "in", "init", "interface",
        "internal", "is", "lock", "namespace", "new", "operator", "out",
        "override", "params", "partial", "private", "protected", "public",
        "readonly", "record", "ref", "return", "sealed", "set", "sizeof",
        "stackalloc", "static", "struct", "switch", "this", "throw", "try",
        "typeof", "unchecked", "unsafe", "using", "var", "virtual", "void",
        "volatile", "when", "where", "while", "yield", "true", "false", "null",
    ],
    class_keywords: &["class", "struct", "interface", "enum", "record", "namespace", "new"],
    types: &[
        "bool", "byte", "char", "decimal", "double", "float", "int", "long",
        "object", "sbyte", "short", "string", "uint", "ulong", "ushort",
        "String", "List", "Dictionary", "Task", "Action", "Func", "Console",
    ],
    string_prefixes: &["@", "$", "$@", "@$"],
    ..BASE
};

static GO: LexicalProfile = LexicalProfile {
    language: Language::Go,
    keywords: &[
        "break", "case", "chan", "const", "continue", "default", "defer", "else",
        "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
        "map", "package", "range", "return", "select", "struct", "switch",
        "type", "var", "true", "false", "nil", "iota",
    ],
    class_keywords: &["type"],
    function_keywords: &["func"],
    types: &[
        "bool", "byte", "complex64", "complex128", "error", "float32", "float64",
        "int", "int8", "int16", "int32", "int64", "rune", "string", "uint",
        "uint8", "uint16", "uint32", "uint64", "uintptr", "any",
    ],
    template_strings: true,
    template_escapes: false,
    ..BASE
};

static PHP: LexicalProfile = LexicalProfile {
    language: Language::Php,
    keywords: &[
        "abstract", "and", "array", "as", "break", "callable", "case", "catch",
        "class", "clone", "const", "continue", "declare", "default", "do",
        "echo", "else", "elseif", "empty", "enum", "extends", "final", "finally",
        "fn", "for", "foreach", "function", "global", "if", "implements",
        "include", "include_once", "instanceof", "interface", "isset", "list",
        "match", "namespace", "new", "or", "print", "private", "protected",
        "public", "readonly", "require", "require_once", "return", "static",
        "switch", "throw", "trait", "try", "unset", "use", "var", "while",
        "xor", "yield", "true", "false", "null", "TRUE", "FALSE", "NULL",
    ],
    class_keywords: &["class", "interface", "trait", "enum", "extends", "implements", "new"],
    function_keywords: &["function"],
    types: &["int", "float", "string", "bool", "object", "mixed", "void", "never", "self", "parent"],
    line_comments: &["//", "#"],
    variable_sigil: Some('$'),
    php_tags: true,
    ..BASE
};

static RUBY: LexicalProfile = LexicalProfile {
    language: Language::Ruby,
    keywords: &[
        "alias", "and", "begin", "break", "case", "class", "def", "defined?",
        "do", "else", "elsif", "end", "ensure", "for", "if", "in", "module",
        "next", "not", "or", "redo", "rescue", "retry", "return", "self",
        "super", "then", "undef", "unless", "until", "when", "while", "yield",
        "require", "require_relative", "include", "extend", "attr_reader",
        "attr_writer", "attr_accessor", "private", "protected", "public",
        "raise", "lambda", "proc", "true", "false", "nil",
    ],
    class_keywords: &["class", "module"],
    function_keywords: &["def"],
    types: &["Integer", "Float", "String", "Symbol", "Array", "Hash", "Proc", "Struct"],
    line_comments: &["#"],
    block_comment: None,
    ..BASE
};

static SHELL: LexicalProfile = LexicalProfile {
    language: Language::Shell,
    keywords: &[
        "if", "then", "else", "elif", "fi", "case", "esac", "for", "while",
        "until", "do", "done", "in", "function", "select", "return", "exit",
        "break", "continue", "shift", "export", "readonly", "declare", "local",
        "unset", "source", "alias", "eval", "exec", "trap", "set", "true",
        "false",
    ],
    function_keywords: &["function"],
    types: &[],
    line_comments: &["#"],
    block_comment: None,
    template_strings: true,
    single_quote_escapes: false,
    variable_sigil: Some('$'),
    operators: "=!<>+-*/%&|^~",
    punctuation: "(){}[];,",
    ..BASE
};

static SQL: LexicalProfile = LexicalProfile {
    language: Language::Sql,
    keywords: &[
        "select", "from", "where", "and", "or", "not", "insert", "into",
        "values", "update", "set", "delete", "create", "table", "alter", "drop",
        "index", "view", "join", "inner", "left", "right", "outer", "full", "on",
        "as", "order", "by", "group", "having", "limit", "offset", "union",
        "all", "distinct", "case", "when", "then", "else", "end", "is", "null",
        "like", "in", "between", "exists", "primary", "key", "foreign",
        "references", "default", "constraint", "unique", "begin", "commit",
        "rollback", "with", "returning", "true", "false", "asc", "desc",
    ],
    case_insensitive_keywords: true,
    class_keywords: &["table", "view", "into", "from", "join", "update"],
    types: &[
        "INT", "INTEGER", "BIGINT", "SMALLINT", "VARCHAR", "CHAR", "TEXT",
        "BOOLEAN", "DATE", "TIMESTAMP", "DECIMAL", "NUMERIC", "REAL", "FLOAT",
        "BLOB", "SERIAL", "int", "integer", "bigint", "varchar", "text",
        "boolean", "date", "timestamp", "decimal", "numeric", "real", "serial",
    ],
    line_comments: &["--"],
    escape: Escape::DoubledQuote,
    operators: "=!<>+-*/%|",
    ..BASE
};

static YAML: LexicalProfile = LexicalProfile {
    language: Language::Yaml,
    keywords: &["true", "false", "null", "yes", "no", "on", "off", "True", "False", "Null"],
    line_comments: &["#"],
    block_comment: None,
    identifier_extras: "-.",
    key_values: true,
    operators: "|>&*!",
    punctuation: "{}[],:",
    ..BASE
};

static SWIFT: LexicalProfile = LexicalProfile {
    language: Language::Swift,
    keywords: &[
        "associatedtype", "break", "case", "catch", "class", "continue",
        "default", "defer", "deinit", "do", "else", "enum", "extension",
        "fallthrough", "fileprivate", "final", "for", "func", "guard", "if",
        "import", "in", "init", "inout", "internal", "is", "lazy", "let",
        "mutating", "open", "operator", "override", "private", "protocol",
        "public", "repeat", "required", "rethrows", "return", "self", "Self",
        "some", "static", "struct", "subscript", "super", "switch", "throw",
        "throws", "try", "typealias", "var", "weak", "where", "while", "async",
        "await", "actor", "true", "false", "nil",
    ],
    class_keywords: &["class", "struct", "enum", "protocol", "extension", "actor", "typealias"],
    function_keywords: &["func"],
    types: &[
        "Int", "Int32", "Int64", "UInt", "Float", "Double", "Bool", "String",
        "Character", "Array", "Dictionary", "Set", "Optional", "Any", "Void",
    ],
    nested_comments: true,
    single_quote_strings: false,
    triple_quote_strings: true,
    annotations: true,
    ..BASE
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_matching_profile() {
        for language in Language::ALL {
            let p = profile(language);
            assert_eq!(p.language, language, "profile mismatch for {language}");
        }
    }

    #[test]
    fn test_case_insensitive_keywords() {
        let sql = profile(Language::Sql);
        assert!(sql.is_keyword("SELECT"));
        assert!(sql.is_keyword("select"));
        assert!(sql.introduces_class("FROM"));

        let rust = profile(Language::Rust);
        assert!(rust.is_keyword("fn"));
        assert!(!rust.is_keyword("FN"));
    }

    #[test]
    fn test_generic_profile_is_minimal() {
        let generic = profile(Language::Plaintext);
        assert!(generic.keywords.is_empty());
        assert!(generic.operators.is_empty());
        assert!(generic.punctuation.is_empty());
        assert_eq!(generic.block_comment, Some(("/*", "*/")));
    }
}
