// src/content.rs
// Static site content backing the marketing pages

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    AiAutomation,
    Development,
    Infrastructure,
    Consulting,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    AiAutomation,
    WebApp,
    InternalTool,
    Infrastructure,
    Integration,
}

/// One service offering shown on the services page
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ServiceCategory,
}

/// One portfolio entry shown on the portfolio page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    pub tech_stack: Vec<&'static str>,
    pub image_url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_url: Option<&'static str>,
    pub featured: bool,
}

/// The nine published project-type labels offered by the contact form.
/// Advisory only: the schema accepts any non-empty project type.
pub const PROJECT_TYPES: [&str; 9] = [
    "AI Automation & Workflows",
    "AI Agents & Chatbots",
    "Internal Business Tools",
    "Web Applications",
    "Website Development",
    "API Integrations",
    "Cloud Infrastructure",
    "DevOps Engineering",
    "AI Consulting",
];

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "ai-automations",
            icon: "automation",
            title: "AI Automations & Workflows",
            description: "Streamline operations with intelligent automation",
            category: ServiceCategory::AiAutomation,
        },
        Service {
            id: "ai-agents",
            icon: "bot",
            title: "AI Agents & Chatbots",
            description: "Build intelligent conversational interfaces",
            category: ServiceCategory::AiAutomation,
        },
        Service {
            id: "internal-tools",
            icon: "tools",
            title: "Internal Business Tools",
            description: "Custom solutions for your team's workflow",
            category: ServiceCategory::Development,
        },
        Service {
            id: "web-apps",
            icon: "app",
            title: "Web Applications",
            description: "Scalable, modern web applications",
            category: ServiceCategory::Development,
        },
        Service {
            id: "websites",
            icon: "globe",
            title: "Website Development",
            description: "Professional websites that convert",
            category: ServiceCategory::Development,
        },
        Service {
            id: "api-integrations",
            icon: "link",
            title: "API Integrations",
            description: "Connect your systems seamlessly",
            category: ServiceCategory::Development,
        },
        Service {
            id: "cloud-infrastructure",
            icon: "cloud",
            title: "Cloud Infrastructure",
            description: "Reliable, scalable cloud solutions",
            category: ServiceCategory::Infrastructure,
        },
        Service {
            id: "devops",
            icon: "gear",
            title: "DevOps Engineering",
            description: "Streamline deployment and operations",
            category: ServiceCategory::Infrastructure,
        },
        Service {
            id: "ai-consulting",
            icon: "lightbulb",
            title: "AI Consulting",
            description: "Strategic guidance for AI adoption",
            category: ServiceCategory::Consulting,
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "inventory-automation",
            name: "Inventory Management Automation",
            category: ProjectCategory::AiAutomation,
            description: "AI-powered inventory tracking system that automatically reorders stock and predicts demand patterns",
            tech_stack: vec!["Python", "TensorFlow", "FastAPI", "PostgreSQL"],
            image_url: "/images/portfolio/inventory-automation.png",
            project_url: Some("#"),
            featured: true,
        },
        Project {
            id: "customer-support-bot",
            name: "Customer Support AI Agent",
            category: ProjectCategory::AiAutomation,
            description: "Intelligent chatbot handling 80% of customer inquiries with natural language understanding",
            tech_stack: vec!["OpenAI", "LangChain", "Next.js", "Redis"],
            image_url: "/images/portfolio/support-bot.png",
            project_url: Some("#"),
            featured: true,
        },
        Project {
            id: "ecommerce-platform",
            name: "E-Commerce Platform",
            category: ProjectCategory::WebApp,
            description: "Full-featured online store with payment processing, inventory management, and analytics",
            tech_stack: vec!["Next.js", "Stripe", "PostgreSQL", "TailwindCSS"],
            image_url: "/images/portfolio/ecommerce.png",
            project_url: Some("#"),
            featured: true,
        },
        Project {
            id: "project-management-tool",
            name: "Project Management Dashboard",
            category: ProjectCategory::InternalTool,
            description: "Custom project tracking system with team collaboration, time tracking, and reporting features",
            tech_stack: vec!["React", "Node.js", "MongoDB", "Socket.io"],
            image_url: "/images/portfolio/project-management.svg",
            project_url: Some("#"),
            featured: false,
        },
        Project {
            id: "healthcare-portal",
            name: "Healthcare Patient Portal",
            category: ProjectCategory::WebApp,
            description: "HIPAA-compliant patient portal for appointment scheduling, medical records, and telemedicine",
            tech_stack: vec!["Next.js", "AWS", "PostgreSQL", "Twilio"],
            image_url: "/images/portfolio/healthcare-portal.svg",
            project_url: Some("#"),
            featured: false,
        },
        Project {
            id: "crm-integration",
            name: "Multi-Platform CRM Integration",
            category: ProjectCategory::Integration,
            description: "Unified CRM system integrating Salesforce, HubSpot, and custom databases with real-time sync",
            tech_stack: vec!["Node.js", "GraphQL", "Redis", "Docker"],
            image_url: "/images/portfolio/crm-integration.svg",
            project_url: Some("#"),
            featured: false,
        },
        Project {
            id: "cloud-migration",
            name: "Enterprise Cloud Migration",
            category: ProjectCategory::Infrastructure,
            description: "Complete migration of legacy systems to AWS with zero downtime and 40% cost reduction",
            tech_stack: vec!["AWS", "Terraform", "Kubernetes", "Docker"],
            image_url: "/images/portfolio/cloud-migration.png",
            project_url: Some("#"),
            featured: true,
        },
        Project {
            id: "hr-management-system",
            name: "HR Management System",
            category: ProjectCategory::InternalTool,
            description: "Comprehensive HR platform for employee onboarding, performance reviews, and leave management",
            tech_stack: vec!["Vue.js", "Django", "PostgreSQL", "Celery"],
            image_url: "/images/portfolio/hr-system.svg",
            project_url: Some("#"),
            featured: false,
        },
        Project {
            id: "analytics-dashboard",
            name: "Real-Time Analytics Dashboard",
            category: ProjectCategory::WebApp,
            description: "Business intelligence dashboard with real-time data visualization and custom reporting",
            tech_stack: vec!["React", "D3.js", "Python", "ClickHouse"],
            image_url: "/images/portfolio/analytics-dashboard.svg",
            project_url: Some("#"),
            featured: false,
        },
        Project {
            id: "payment-gateway-integration",
            name: "Payment Gateway Integration",
            category: ProjectCategory::Integration,
            description: "Multi-currency payment system integrating Stripe, PayPal, and local payment providers",
            tech_stack: vec!["Node.js", "Express", "PostgreSQL", "Stripe"],
            image_url: "/images/portfolio/payment-gateway.svg",
            project_url: Some("#"),
            featured: false,
        },
        Project {
            id: "devops-pipeline",
            name: "CI/CD Pipeline Automation",
            category: ProjectCategory::Infrastructure,
            description: "Automated deployment pipeline with testing, security scanning, and rollback capabilities",
            tech_stack: vec!["GitHub Actions", "Docker", "Kubernetes", "ArgoCD"],
            image_url: "/images/portfolio/devops-pipeline.svg",
            project_url: Some("#"),
            featured: false,
        },
        Project {
            id: "document-processing",
            name: "AI Document Processing System",
            category: ProjectCategory::AiAutomation,
            description: "Automated document extraction and classification using computer vision and NLP",
            tech_stack: vec!["Python", "OpenCV", "spaCy", "FastAPI"],
            image_url: "/images/portfolio/document-processing.svg",
            project_url: Some("#"),
            featured: false,
        },
    ]
}
