//! Static site copy: courses, stats, FAQ, testimonials, products, policy.

use crate::core::api::models::TeamMember;

pub const COMPANY_NAME: &str = "Edutalks Learning Pvt. Ltd.";
pub const CONTACT_EMAIL: &str = "contact@edutalksacademy.in";
pub const CONTACT_PHONE: &str = "+91 98765 43210";
pub const CONTACT_ADDRESS: &str = "Hyderabad, Telangana, India";
pub const RECRUITER_EMAIL: &str = "recruiter@edutalksacademy.in";
pub const PRIVACY_EMAIL: &str = "contact@edutalks.tech";

/// Accent used for generated avatars
const AVATAR_BACKGROUND: &str = "f97316";

const DEFAULT_BIO: &str = "Dedicated professional helping students achieve their tech dreams.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: f64,
    pub suffix: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub title: &'static str,
    pub description: &'static str,
    pub curriculum: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tech {
    pub name: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicySection {
    pub title: &'static str,
    pub body: &'static str,
    pub items: &'static [&'static str],
}

/// A team card as rendered on the about page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamProfile {
    pub name: String,
    pub role: String,
    pub image: String,
    pub bio: String,
}

impl From<&TeamMember> for TeamProfile {
    fn from(member: &TeamMember) -> Self {
        let image = if member.image.trim().is_empty() {
            avatar_url(&member.name)
        } else {
            member.image.clone()
        };
        let bio = if member.description.trim().is_empty() {
            DEFAULT_BIO.to_string()
        } else {
            member.description.clone()
        };
        Self {
            name: member.name.clone(),
            role: member.role.clone(),
            image,
            bio,
        }
    }
}

/// Team shown when the API returns no members
pub fn fallback_team() -> Vec<TeamProfile> {
    [
        (
            "Dr. Rajesh Kumar",
            "Founder & CEO",
            "Visionary leader with 15+ years in EdTech, passionate about democratizing quality education.",
        ),
        (
            "Priya Sharma",
            "Chief Technology Officer",
            "Tech innovator building scalable learning platforms that reach millions of students.",
        ),
        (
            "Amit Patel",
            "Head of Curriculum",
            "Curriculum expert designing industry-aligned programs that bridge the skill gap.",
        ),
        (
            "Sneha Reddy",
            "Director of Student Success",
            "Student advocate ensuring every learner achieves their career goals through personalized support.",
        ),
    ]
    .into_iter()
    .map(|(name, role, bio)| TeamProfile {
        name: name.to_string(),
        role: role.to_string(),
        image: avatar_url(name),
        bio: bio.to_string(),
    })
    .collect()
}

/// Map API members to cards, falling back to the built-in team when empty
pub fn team_profiles(members: &[TeamMember]) -> Vec<TeamProfile> {
    if members.is_empty() {
        fallback_team()
    } else {
        members.iter().map(TeamProfile::from).collect()
    }
}

/// Generated initials avatar
pub fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background={AVATAR_BACKGROUND}&color=fff&size=400",
        urlencoding::encode(name.trim())
    )
}

/// `mailto:` link for applying to a posting
pub fn application_mailto(job_title: &str) -> String {
    format!(
        "mailto:{RECRUITER_EMAIL}?subject={}",
        urlencoding::encode(&format!("Application for {job_title}"))
    )
}

pub const HOME_STATS: &[Stat] = &[
    Stat { label: "Learners", value: 10000.0, suffix: "+" },
    Stat { label: "Mentors", value: 500.0, suffix: "+" },
    Stat { label: "Courses", value: 100.0, suffix: "+" },
    Stat { label: "Internships", value: 1000.0, suffix: "+" },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { label: "Students Trained", value: 10000.0, suffix: "+" },
    Stat { label: "Expert Mentors", value: 500.0, suffix: "+" },
    Stat { label: "Courses Offered", value: 50.0, suffix: "+" },
    Stat { label: "Success Rate", value: 95.0, suffix: "%" },
];

pub const INTERNSHIP_STATS: &[Stat] = &[
    Stat { label: "Interns Placed", value: 500.0, suffix: "+" },
    Stat { label: "Partner Companies", value: 50.0, suffix: "+" },
    Stat { label: "Success Rate", value: 95.0, suffix: "%" },
];

pub const PILLARS: &[Feature] = &[
    Feature {
        title: "Learning",
        description: "Acquire high-demand skills through our curated learning paths.",
    },
    Feature {
        title: "Skill Development",
        description: "Practical projects and workshops to bridge the gap between theory and practice.",
    },
    Feature {
        title: "Mentorship",
        description: "One-on-one sessions with industry experts to guide your career.",
    },
    Feature {
        title: "Storytelling",
        description: "Craft your narrative and build a personal brand that stands out.",
    },
];

pub const PARTNERS: &[&str] = &["Google", "Microsoft", "Amazon", "Meta", "IBM", "Intel"];

pub const VALUES: &[&str] = &["Inclusion", "Innovation", "Learning", "Excellence"];

pub const MISSION: &str = "To democratize quality education and career opportunities through \
    interactive learning and expert-led mentorship programs. We believe every individual deserves \
    access to the skills that shape the future.";

pub const VISION: &str = "To become the world's most trusted EdTech platform for practical skill \
    development and professional growth. We envision a future where education truly prepares \
    individuals for the careers they want.";

pub const STORY: &[&str] = &[
    "Edutalks is a next-generation learning platform focused on delivering industry-relevant \
     Information Technology courses. Our programs help students, graduates, and professionals \
     build practical skills aligned with current and future tech careers.",
    "Founded in 2024, Edutalks Learning Pvt. Ltd. was born out of a simple realization: education \
     should be a conversation, not a monologue. We aim to bridge the gap between traditional \
     learning and industry requirements.",
    "By combining expert mentorship with practical skill development, we empower students and \
     professionals to take charge of their careers and lead with confidence.",
];

pub const COURSES: &[Course] = &[
    Course {
        title: "Artificial Intelligence & Machine Learning",
        description: "Master neural networks, deep learning, and predictive modeling to build \
            intelligent systems that solve real-world problems.",
        curriculum: &[
            "Introduction to Artificial Intelligence",
            "Machine Learning Fundamentals",
            "Supervised & Unsupervised Learning",
            "Deep Learning Essentials",
            "Neural Networks",
            "Natural Language Processing (NLP)",
            "Computer Vision",
            "AI Tools & Frameworks",
            "Generative AI Fundamentals",
            "Prompt Engineering",
        ],
    },
    Course {
        title: "Data Science & Analytics",
        description: "Extract powerful insights from complex data sets using statistical \
            analysis, machine learning, and advanced visualization tools.",
        curriculum: &[
            "Data Science Foundations",
            "Python for Data Science",
            "Statistics for Data Science",
            "Data Analysis with Pandas & NumPy",
            "Data Visualization (Matplotlib, Seaborn)",
            "SQL for Data Analysts",
            "Big Data Basics",
            "Data Science Projects",
            "Business Analytics",
            "Power BI & Tableau Basics",
        ],
    },
    Course {
        title: "Full Stack Development",
        description: "Comprehensive training across both frontend and backend technologies to \
            build scalable, production-ready applications.",
        curriculum: &[
            "Full Stack Web Development Overview",
            "Frontend Development (HTML, CSS, JavaScript)",
            "Advanced JavaScript",
            "React.js",
            "Backend Development with Node.js",
            "Express.js & REST APIs",
            "Database Management (MySQL, MongoDB)",
            "MERN Stack Development",
            "Authentication & Security Basics",
            "Full Stack Capstone Project",
        ],
    },
    Course {
        title: "Web Development",
        description: "Design and develop modern, responsive, and high-performance websites \
            using the latest standards and frameworks.",
        curriculum: &[
            "Web Development Fundamentals",
            "Responsive Web Design",
            "Bootstrap & Tailwind CSS",
            "PHP & MySQL",
            "WordPress Development",
            "Website Deployment & Hosting",
        ],
    },
    Course {
        title: "Cloud Computing & DevOps",
        description: "Master AWS, Azure, and infrastructure automation while building robust \
            CI/CD pipelines for modern software delivery.",
        curriculum: &[
            "Cloud Computing Fundamentals",
            "AWS Cloud Practitioner Basics",
            "Microsoft Azure Fundamentals",
            "Google Cloud Platform Basics",
            "DevOps Fundamentals",
            "Docker Basics",
            "Kubernetes Introduction",
            "CI/CD Pipelines",
        ],
    },
    Course {
        title: "Cyber Security & Networking",
        description: "Protect digital assets and networks from evolving threats through \
            advanced security protocols and ethical hacking techniques.",
        curriculum: &[
            "Cyber Security Fundamentals",
            "Ethical Hacking Basics",
            "Network Fundamentals",
            "Linux for IT Professionals",
            "Information Security Basics",
            "Cyber Laws & Compliance",
        ],
    },
    Course {
        title: "Programming Languages",
        description: "Master core languages like Python, Java, and C++ to build a solid \
            foundation for your career in software engineering.",
        curriculum: &[
            "Python Programming",
            "Java Programming",
            "C Programming",
            "C++ Programming",
            "Data Structures & Algorithms",
        ],
    },
];

pub const COURSE_BENEFITS: &[&str] = &[
    "Industry-relevant curriculum",
    "Expert mentorship",
    "Hands-on projects",
    "Flexible learning",
];

pub const LEARNING_STEPS: &[Feature] = &[
    Feature { title: "Enroll", description: "Choose your program and sign up" },
    Feature { title: "Learn", description: "Attend sessions and build projects" },
    Feature { title: "Practice", description: "Apply your skills with mentor feedback" },
    Feature { title: "Grow", description: "Earn your certificate and launch your career" },
];

pub const INTERNSHIP_BENEFITS: &[Feature] = &[
    Feature {
        title: "Real Projects",
        description: "Work on actual products used by thousands of students",
    },
    Feature {
        title: "Mentorship",
        description: "Learn from experienced industry professionals",
    },
    Feature {
        title: "Skill Development",
        description: "Hands-on experience with cutting-edge technologies",
    },
    Feature {
        title: "Certificate",
        description: "Receive completion certificate and letter of recommendation",
    },
];

pub const INTERNSHIP_STEPS: &[Feature] = &[
    Feature {
        title: "Browse Openings",
        description: "Visit our Careers page to see available internship roles",
    },
    Feature {
        title: "Submit Application",
        description: "Send your resume and portfolio via the job portal",
    },
    Feature {
        title: "Interview",
        description: "Complete technical and HR interview rounds",
    },
    Feature {
        title: "Start Learning",
        description: "Begin your internship journey with us",
    },
];

pub const TECH_STACK: &[Tech] = &[
    Tech { name: "React", category: "Frontend" },
    Tech { name: "TypeScript", category: "Frontend" },
    Tech { name: "Tailwind CSS", category: "Frontend" },
    Tech { name: "Next.js", category: "Frontend" },
    Tech { name: "HTML5", category: "Frontend" },
    Tech { name: "JavaScript", category: "Frontend" },
    Tech { name: "Node.js", category: "Backend" },
    Tech { name: "Express", category: "Backend" },
    Tech { name: "Python", category: "Backend" },
    Tech { name: "Django", category: "Backend" },
    Tech { name: "Java", category: "Backend" },
    Tech { name: "Spring", category: "Backend" },
    Tech { name: "MySQL", category: "Database" },
    Tech { name: "MongoDB", category: "Database" },
    Tech { name: "PostgreSQL", category: "Database" },
    Tech { name: "Redis", category: "Database" },
    Tech { name: "Git", category: "Tools" },
    Tech { name: "Docker", category: "Tools" },
    Tech { name: "AWS", category: "Tools" },
    Tech { name: "Kubernetes", category: "Tools" },
    Tech { name: "Linux", category: "Tools" },
];

pub const TECH_CATEGORIES: &[&str] = &["Frontend", "Backend", "Database", "Tools"];

pub fn tech_in(category: &str) -> impl Iterator<Item = &'static Tech> + '_ {
    TECH_STACK.iter().filter(move |t| t.category == category)
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        category: "General",
        question: "What is Edutalks?",
        answer: "Edutalks is an innovative EdTech platform that bridges the gap between \
            traditional education and industry requirements through interactive learning, \
            expert mentorship, and practical skill development programs.",
    },
    FaqEntry {
        category: "General",
        question: "Who can join Edutalks?",
        answer: "Edutalks is open to students, fresh graduates, and working professionals \
            looking to upskill or transition to new career paths. We offer programs suitable \
            for beginners to advanced learners.",
    },
    FaqEntry {
        category: "Courses",
        question: "What types of courses do you offer?",
        answer: "We offer a wide range of courses including Web Development, Data Science, \
            AI/ML, Mobile App Development, Digital Marketing, and more. Each course includes \
            hands-on projects and industry mentorship.",
    },
    FaqEntry {
        category: "Courses",
        question: "Are the courses self-paced or scheduled?",
        answer: "We offer both self-paced and instructor-led courses. Self-paced courses allow \
            you to learn at your own speed, while scheduled courses include live sessions with \
            instructors and peer interaction.",
    },
    FaqEntry {
        category: "Internships",
        question: "How do I apply for an internship?",
        answer: "You can apply for internships through our Internships page. Simply browse \
            available positions, select one that matches your interests, and submit your \
            application with your resume and portfolio.",
    },
    FaqEntry {
        category: "Internships",
        question: "Are internships paid?",
        answer: "Yes, most of our internships are paid. The stipend varies based on the role, \
            duration, and your skill level. Details are mentioned in each internship posting.",
    },
    FaqEntry {
        category: "Mentorship",
        question: "How does the mentorship program work?",
        answer: "Our mentorship program connects you with industry experts for one-on-one \
            guidance. Mentors help with career planning, project reviews, interview \
            preparation, and skill development through regular sessions.",
    },
    FaqEntry {
        category: "Pricing",
        question: "What are the course fees?",
        answer: "Course fees vary depending on the program duration and complexity. We offer \
            flexible payment plans and occasional discounts. Contact us for detailed pricing \
            information for specific courses.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya Sharma",
        role: "Software Engineer",
        company: "Tech Corp",
        quote: "Edutalks transformed my career! The mentorship program connected me with \
            industry experts who guided me through real-world projects. I landed my dream job \
            within 3 months of completing the course.",
        rating: 5,
    },
    Testimonial {
        name: "Rahul Kumar",
        role: "Data Scientist",
        company: "Analytics Inc",
        quote: "The practical approach to learning at Edutalks is unmatched. Instead of just \
            theory, I worked on live projects that prepared me for the challenges in the \
            industry. Highly recommended!",
        rating: 5,
    },
    Testimonial {
        name: "Ananya Reddy",
        role: "Full Stack Developer",
        company: "StartupXYZ",
        quote: "The internship program gave me hands-on experience that no classroom could \
            provide. The instructors are patient, knowledgeable, and genuinely care about \
            student success.",
        rating: 5,
    },
    Testimonial {
        name: "Vikram Singh",
        role: "Product Manager",
        company: "Innovation Labs",
        quote: "Edutalks helped me transition from engineering to product management. The \
            career guidance and skill development programs are top-notch. Best investment in \
            my career!",
        rating: 5,
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "AI Pronunciation",
        description: "Master any language with our advanced AI-powered pronunciation coach. \
            Get real-time feedback on your accent and intonation.",
        url: "https://edutalks.tech/",
    },
    Product {
        name: "Exam Portal",
        description: "Comprehensive testing platform with mock exams, detailed analytics, and \
            personalized study recommendations.",
        url: "https://exam.eduexam.work.gd/",
    },
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://www.facebook.com/profile.php?id=61578676177087"),
    ("Instagram", "https://www.instagram.com/edutalks_tech"),
    ("LinkedIn", "https://www.linkedin.com/company/edutalks-pvt-ltd/"),
];

pub const PRIVACY_POLICY: &[PolicySection] = &[
    PolicySection {
        title: "Information We Collect",
        body: "We may collect personal information you voluntarily submit, and data collected \
            automatically when you access our services, including:",
        items: &[
            "Full name, email address and phone number",
            "Educational details and portfolio details",
            "Attendance records, exam responses and results",
            "Voice recordings",
            "IP address, device and browser type",
            "Pages visited, usage analytics and log data",
        ],
    },
    PolicySection {
        title: "How We Use Your Information",
        body: "We use the collected information for purposes including:",
        items: &[
            "Providing, operating, and improving our services",
            "Authenticating users and securing your accounts",
            "Delivering attendance tracking, exam results, and pronunciation feedback",
            "Personalizing your learning experience",
            "Communicating important updates and notifications",
            "Preventing fraud and complying with legal obligations",
        ],
    },
    PolicySection {
        title: "Sharing of Information",
        body: "We share information only with service providers acting on our behalf, when \
            required by law, in a business transfer, or with your explicit consent.",
        items: &[],
    },
    PolicySection {
        title: "Data Security",
        body: "We implement reasonable technical and organizational measures to protect your \
            information from unauthorized access, loss, misuse, or alteration. However, no \
            system is fully secure.",
        items: &[],
    },
    PolicySection {
        title: "Third-Party Links",
        body: "Our services may contain links to external websites or tools. We are not \
            responsible for their privacy practices.",
        items: &[],
    },
    PolicySection {
        title: "Children's Privacy",
        body: "Our services are not intended for children under the age of 13. We do not \
            knowingly collect personal information from children under 13 without parental \
            consent.",
        items: &[],
    },
    PolicySection {
        title: "Your Rights",
        body: "Depending on your region, you may have the right to:",
        items: &[
            "Access your personal data",
            "Correct or update your data",
            "Delete your data",
            "Restrict or object to processing",
            "Port your information",
        ],
    },
    PolicySection {
        title: "Data Retention",
        body: "We retain your personal information only as long as necessary for the purposes \
            described in this policy, including legal obligations.",
        items: &[],
    },
    PolicySection {
        title: "Updates to This Policy",
        body: "We may modify this policy from time to time and will update the date at the top \
            of this page when we do.",
        items: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_url_encodes_name() {
        assert_eq!(
            avatar_url("Dr. Rajesh Kumar"),
            "https://ui-avatars.com/api/?name=Dr.%20Rajesh%20Kumar&background=f97316&color=fff&size=400"
        );
    }

    #[test]
    fn test_links_encode_reserved_characters() {
        assert_eq!(
            application_mailto("C++ & Rust Dev"),
            "mailto:recruiter@edutalksacademy.in?subject=Application%20for%20C%2B%2B%20%26%20Rust%20Dev"
        );
        assert!(avatar_url("José Ñ").contains("name=Jos%C3%A9%20%C3%91&"));
    }

    #[test]
    fn test_application_mailto() {
        assert_eq!(
            application_mailto("UI Designer"),
            "mailto:recruiter@edutalksacademy.in?subject=Application%20for%20UI%20Designer"
        );
    }

    #[test]
    fn test_team_profiles_fallback_and_defaults() {
        assert_eq!(team_profiles(&[]).len(), 4);

        let member: TeamMember =
            serde_json::from_str(r#"{"id":1,"name":"Ravi","role":"Mentor","image":""}"#).unwrap();
        let profiles = team_profiles(std::slice::from_ref(&member));
        assert_eq!(profiles.len(), 1);
        assert!(profiles[0].image.contains("name=Ravi"));
        assert_eq!(profiles[0].bio, DEFAULT_BIO);
    }

    #[test]
    fn test_every_tech_has_known_category() {
        for tech in TECH_STACK {
            assert!(TECH_CATEGORIES.contains(&tech.category), "{}", tech.name);
        }
        assert_eq!(tech_in("Database").count(), 4);
    }
}
