//! Fixed skill taxonomy used for job description matching

pub const CORE_CS: &str = "Core CS";
pub const LANGUAGES: &str = "Languages";
pub const WEB: &str = "Web";
pub const DATA: &str = "Data";
pub const CLOUD_DEVOPS: &str = "Cloud/DevOps";
pub const TESTING: &str = "Testing";

/// One taxonomy category with its lowercase keywords in match order
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub important: bool,
}

pub static TAXONOMY: &[SkillCategory] = &[
    SkillCategory {
        name: CORE_CS,
        keywords: &[
            "dsa",
            "data structures",
            "algorithms",
            "oop",
            "object-oriented",
            "dbms",
            "database management",
            "os",
            "operating system",
            "networks",
            "networking",
            "tcp/ip",
            "http",
            "system design",
        ],
        important: true,
    },
    SkillCategory {
        name: LANGUAGES,
        keywords: &[
            "java",
            "python",
            "javascript",
            "typescript",
            "c++",
            "c#",
            "go",
            "golang",
            "rust",
            "kotlin",
        ],
        important: true,
    },
    SkillCategory {
        name: WEB,
        keywords: &[
            "react", "next.js", "nextjs", "node.js", "nodejs", "express", "rest", "graphql",
            "webpack", "vue", "angular", "html", "css",
        ],
        important: false,
    },
    SkillCategory {
        name: DATA,
        keywords: &[
            "sql",
            "mongodb",
            "nosql",
            "postgresql",
            "mysql",
            "redis",
            "elasticsearch",
            "firebase",
            "cassandra",
        ],
        important: false,
    },
    SkillCategory {
        name: CLOUD_DEVOPS,
        keywords: &[
            "aws",
            "azure",
            "gcp",
            "docker",
            "kubernetes",
            "k8s",
            "ci/cd",
            "jenkins",
            "gitlab",
            "github",
            "linux",
            "terraform",
            "devops",
        ],
        important: false,
    },
    SkillCategory {
        name: TESTING,
        keywords: &[
            "selenium",
            "cypress",
            "playwright",
            "junit",
            "pytest",
            "jest",
            "mocha",
            "testing",
            "qa",
            "automation",
        ],
        important: false,
    },
];

/// Look up a category by its display name
pub fn category(name: &str) -> Option<&'static SkillCategory> {
    TAXONOMY.iter().find(|c| c.name == name)
}

pub fn keyword_count() -> usize {
    TAXONOMY.iter().map(|c| c.keywords.len()).sum()
}
