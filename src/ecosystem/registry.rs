//! The static ecosystem attribute table.

use super::EcosystemKey;
use crate::core::CursorflowError;

/// Every attribute a template can ask for about an ecosystem.
///
/// All fields are required. [`validate_registry`] checks at start-up that no
/// profile was left with an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcosystemProfile {
    /// Canonical key this profile belongs to
    pub key: EcosystemKey,
    /// Display name, e.g. `React (TypeScript)`
    pub name: &'static str,
    /// Source file extension including the dot
    pub extension: &'static str,
    /// Package manager name
    pub package_manager: &'static str,
    /// Package manifest filename
    pub package_file: &'static str,
    /// Build command
    pub build_command: &'static str,
    /// Linter command
    pub linter: &'static str,
    /// Code generation tool
    pub code_gen: &'static str,
    /// Dependency injection library
    pub di_library: &'static str,
    /// State management options; the first one is the primary choice
    pub state_management: &'static [&'static str],
    /// Async notation
    pub async_pattern: &'static str,
    /// Result type notation
    pub result_type: &'static str,
    /// Immutability idiom
    pub immutability: &'static str,
    /// Serialization library
    pub json_serialization: &'static str,
}

impl EcosystemProfile {
    /// The first state management option.
    pub fn primary_state_management(&self) -> &'static str {
        self.state_management.first().copied().unwrap_or_default()
    }

    /// Derived package manifest format tag.
    pub fn package_format(&self) -> &'static str {
        package_format(self.package_manager)
    }

    fn string_fields(&self) -> [(&'static str, &'static str); 12] {
        [
            ("name", self.name),
            ("extension", self.extension),
            ("package_manager", self.package_manager),
            ("package_file", self.package_file),
            ("build_command", self.build_command),
            ("linter", self.linter),
            ("code_gen", self.code_gen),
            ("di_library", self.di_library),
            ("async_pattern", self.async_pattern),
            ("result_type", self.result_type),
            ("immutability", self.immutability),
            ("json_serialization", self.json_serialization),
        ]
    }
}

/// Map a package manager to the short format tag used in code fences.
pub fn package_format(package_manager: &str) -> &'static str {
    match package_manager {
        "pub" => "yaml",
        "npm" => "json",
        "gradle" => "kotlin",
        "maven" => "xml",
        "pip" => "txt",
        "cargo" => "toml",
        _ => "text",
    }
}

/// Canonical keys sorted alphabetically, for error messages.
pub fn supported_keys() -> Vec<&'static str> {
    let mut keys: Vec<_> = EcosystemKey::ALL.iter().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    keys
}

pub(super) fn profile_for(key: EcosystemKey) -> &'static EcosystemProfile {
    // PROFILES is declared in the same order as EcosystemKey::ALL
    &PROFILES[key as usize]
}

/// Check that the table is complete: one profile per key, in key order, with
/// every field filled in.
pub fn validate_registry() -> Result<(), CursorflowError> {
    for (expected, profile) in EcosystemKey::ALL.iter().zip(PROFILES.iter()) {
        if profile.key != *expected {
            return Err(CursorflowError::IncompleteProfile {
                key: expected.as_str().to_string(),
                field: "key".to_string(),
            });
        }
        for (field, value) in profile.string_fields() {
            if value.trim().is_empty() {
                return Err(CursorflowError::IncompleteProfile {
                    key: profile.key.as_str().to_string(),
                    field: field.to_string(),
                });
            }
        }
        if profile.state_management.is_empty()
            || profile.state_management.iter().any(|s| s.trim().is_empty())
        {
            return Err(CursorflowError::IncompleteProfile {
                key: profile.key.as_str().to_string(),
                field: "state_management".to_string(),
            });
        }
    }
    Ok(())
}

static PROFILES: [EcosystemProfile; 13] = [
    EcosystemProfile {
        key: EcosystemKey::Dart,
        name: "Dart",
        extension: ".dart",
        package_manager: "pub",
        package_file: "pubspec.yaml",
        build_command: "flutter pub run build_runner build",
        linter: "dart analyze",
        code_gen: "build_runner",
        di_library: "injectable",
        state_management: &["Bloc", "Cubit", "Riverpod", "Provider"],
        async_pattern: "Future",
        result_type: "Either<Failure, T>",
        immutability: "@freezed",
        json_serialization: "@JsonSerializable",
    },
    EcosystemProfile {
        key: EcosystemKey::Flutter,
        name: "Flutter",
        extension: ".dart",
        package_manager: "pub",
        package_file: "pubspec.yaml",
        build_command: "flutter pub run build_runner build --delete-conflicting-outputs",
        linter: "flutter analyze",
        code_gen: "build_runner",
        di_library: "injectable",
        state_management: &["Bloc", "Cubit", "Riverpod", "Provider"],
        async_pattern: "Future",
        result_type: "Either<Failure, T>",
        immutability: "@freezed",
        json_serialization: "@JsonSerializable",
    },
    EcosystemProfile {
        key: EcosystemKey::Kotlin,
        name: "Kotlin",
        extension: ".kt",
        package_manager: "gradle",
        package_file: "build.gradle.kts",
        build_command: "./gradlew build",
        linter: "ktlint",
        code_gen: "kapt",
        di_library: "Koin",
        state_management: &["StateFlow", "Flow", "LiveData"],
        async_pattern: "suspend fun",
        result_type: "Result<T, E>",
        immutability: "data class",
        json_serialization: "kotlinx.serialization",
    },
    EcosystemProfile {
        key: EcosystemKey::Android,
        name: "Android (Kotlin)",
        extension: ".kt",
        package_manager: "gradle",
        package_file: "build.gradle.kts",
        build_command: "./gradlew build",
        linter: "ktlint",
        code_gen: "kapt",
        di_library: "Koin",
        state_management: &["StateFlow", "Flow", "LiveData", "Compose State"],
        async_pattern: "suspend fun",
        result_type: "Result<T, E>",
        immutability: "data class",
        json_serialization: "kotlinx.serialization",
    },
    EcosystemProfile {
        key: EcosystemKey::Swift,
        name: "Swift",
        extension: ".swift",
        package_manager: "spm",
        package_file: "Package.swift",
        build_command: "swift build",
        linter: "swiftlint",
        code_gen: "Sourcery",
        di_library: "Swinject",
        state_management: &["@State", "@Binding", "Combine"],
        async_pattern: "async/await",
        result_type: "Result<T, Error>",
        immutability: "struct",
        json_serialization: "Codable",
    },
    EcosystemProfile {
        key: EcosystemKey::Ios,
        name: "iOS (Swift)",
        extension: ".swift",
        package_manager: "spm",
        package_file: "Package.swift",
        build_command: "swift build",
        linter: "swiftlint",
        code_gen: "Sourcery",
        di_library: "Swinject",
        state_management: &["@State", "@Binding", "Combine"],
        async_pattern: "async/await",
        result_type: "Result<T, Error>",
        immutability: "struct",
        json_serialization: "Codable",
    },
    EcosystemProfile {
        key: EcosystemKey::TypeScript,
        name: "TypeScript",
        extension: ".ts",
        package_manager: "npm",
        package_file: "package.json",
        build_command: "npm run build",
        linter: "eslint",
        code_gen: "tsc",
        di_library: "inversify",
        state_management: &["Redux", "MobX", "Zustand", "Context API"],
        async_pattern: "Promise",
        result_type: "Result<T, E>",
        immutability: "readonly",
        json_serialization: "class-transformer",
    },
    EcosystemProfile {
        key: EcosystemKey::React,
        name: "React (TypeScript)",
        extension: ".tsx",
        package_manager: "npm",
        package_file: "package.json",
        build_command: "npm run build",
        linter: "eslint",
        code_gen: "tsc",
        di_library: "inversify",
        state_management: &["Redux", "MobX", "Zustand", "Context API"],
        async_pattern: "Promise",
        result_type: "Result<T, E>",
        immutability: "readonly",
        json_serialization: "class-transformer",
    },
    EcosystemProfile {
        key: EcosystemKey::Python,
        name: "Python",
        extension: ".py",
        package_manager: "pip",
        package_file: "requirements.txt",
        build_command: "python setup.py build",
        linter: "pylint",
        code_gen: "dataclasses",
        di_library: "dependency-injector",
        state_management: &["State Machine", "Event-driven"],
        async_pattern: "async/await",
        result_type: "Result[T, E]",
        immutability: "@dataclass(frozen=True)",
        json_serialization: "dataclasses_json",
    },
    EcosystemProfile {
        key: EcosystemKey::Java,
        name: "Java",
        extension: ".java",
        package_manager: "maven",
        package_file: "pom.xml",
        build_command: "mvn clean install",
        linter: "checkstyle",
        code_gen: "lombok",
        di_library: "Dagger",
        state_management: &["State Pattern", "Observer"],
        async_pattern: "CompletableFuture",
        result_type: "Either<L, R>",
        immutability: "final fields",
        json_serialization: "Jackson",
    },
    EcosystemProfile {
        key: EcosystemKey::CSharp,
        name: "C#",
        extension: ".cs",
        package_manager: "nuget",
        package_file: ".csproj",
        build_command: "dotnet build",
        linter: "StyleCop",
        code_gen: "Source Generators",
        di_library: "Microsoft.Extensions.DependencyInjection",
        state_management: &["State Pattern", "MediatR"],
        async_pattern: "async/await",
        result_type: "Result<T, E>",
        immutability: "readonly",
        json_serialization: "System.Text.Json",
    },
    EcosystemProfile {
        key: EcosystemKey::Go,
        name: "Go",
        extension: ".go",
        package_manager: "go mod",
        package_file: "go.mod",
        build_command: "go build",
        linter: "golangci-lint",
        code_gen: "go generate",
        di_library: "wire",
        state_management: &["State Pattern"],
        async_pattern: "goroutines",
        result_type: "(T, error)",
        immutability: "const",
        json_serialization: "encoding/json",
    },
    EcosystemProfile {
        key: EcosystemKey::Rust,
        name: "Rust",
        extension: ".rs",
        package_manager: "cargo",
        package_file: "Cargo.toml",
        build_command: "cargo build",
        linter: "clippy",
        code_gen: "proc_macro",
        di_library: "shaku",
        state_management: &["State Pattern"],
        async_pattern: "async/await",
        result_type: "Result<T, E>",
        immutability: "immutable by default",
        json_serialization: "serde",
    },
];
