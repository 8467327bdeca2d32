// Static site content. Read-only for the lifetime of the page.

#[derive(Debug)]
pub struct Socials {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub twitter: &'static str,
}

#[derive(Debug)]
pub struct Identity {
    pub name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub socials: Socials,
}

#[derive(Debug)]
pub struct Stats {
    pub start_year: i32,
    pub completed_projects: &'static str,
    pub clients: u32,
}

#[derive(Debug)]
pub struct About {
    pub headline: &'static str,
    pub bio: &'static [&'static str],
    pub portrait: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub desc: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug)]
pub struct Content {
    pub identity: Identity,
    pub stats: Stats,
    pub about: About,
    pub projects: &'static [Project],
    pub stack: &'static [&'static str],
}

impl Stats {
    /// Whole years since `start_year`, never negative.
    pub fn years_experience(&self, current_year: i32) -> i32 {
        (current_year - self.start_year).max(0)
    }
}

impl About {
    /// Headline fragments around the accent ampersand.
    pub fn headline_parts(&self) -> Vec<&'static str> {
        self.headline.split('&').map(str::trim).collect()
    }
}

/// Icon family shown next to a skill tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    Cpu,
    Code,
    Palette,
    Zap,
}

impl SkillIcon {
    pub fn for_skill(skill: &str) -> Self {
        if skill.contains("Shader") || skill.contains("WebGL") {
            SkillIcon::Cpu
        } else if skill.contains("React") {
            SkillIcon::Code
        } else if skill.contains("Design") {
            SkillIcon::Palette
        } else {
            SkillIcon::Zap
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SkillIcon::Cpu => "icon-cpu",
            SkillIcon::Code => "icon-code",
            SkillIcon::Palette => "icon-palette",
            SkillIcon::Zap => "icon-zap",
        }
    }
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: "p1",
        title: "Prism Core",
        category: "Website",
        desc: "A custom GLSL raymarching engine built for reactive audio visualizations.",
        tech: &["WebGL", "GLSL", "WebAudio"],
        link: "#",
    },
    Project {
        id: "p2",
        title: "Void Shell",
        category: "App",
        desc: "Holographic dashboard system for real-time sensor data visualization.",
        tech: &["Three.js", "TypeScript", "React"],
        link: "#",
    },
    Project {
        id: "p3",
        title: "Glass-Cut UI",
        category: "Design",
        desc: "A framework for physically-based UI elements that react to dynamic lighting.",
        tech: &["Tailwind", "GLSL", "Next.js"],
        link: "#",
    },
    Project {
        id: "p4",
        title: "Aero Engine",
        category: "Website",
        desc: "Browser-based particle system handling 1M+ particles using GPGPU.",
        tech: &["WebGL 2.0", "D3.js", "Svelte"],
        link: "#",
    },
];

pub static CONTENT: Content = Content {
    identity: Identity {
        name: "FAHIM KHAN",
        role: "Creative Engineer & Software Architect",
        email: "fahimkhanh696@gmail.com",
        socials: Socials {
            github: "https://github.com",
            linkedin: "https://linkedin.com",
            twitter: "https://twitter.com",
        },
    },
    stats: Stats {
        start_year: 2022,
        completed_projects: "15+",
        clients: 9,
    },
    about: About {
        headline: "Building the future, one clean line of code at a time",
        bio: &[
            "A developer navigating the AI era with curiosity, discipline, and a builder\u{2019}s mindset. I work with Python, JavaScript, Django, React, and modern web tools to create applications that are practical, scalable, and user-focused.",
            "I\u{2019}m continuously sharpening my skills in software development, English communication, and problem-solving, because technology moves fast and standing still isn\u{2019}t an option. My goal is simple: build useful things, think clearly, and grow into someone who creates value at scale.",
        ],
        portrait: "image/portfolio.jpeg",
    },
    projects: &PROJECTS,
    stack: &[
        "GLSL Shaders",
        "WebGL / Three.js",
        "React / Next.js",
        "TypeScript",
        "GPU Computing",
        "Tailwind CSS",
        "Rust / Wasm",
        "Generative Art",
    ],
};
