//! Bundled sample job description

use crate::processing::analyzer::AnalysisRequest;

pub const SAMPLE_COMPANY: &str = "Tech Corp";
pub const SAMPLE_ROLE: &str = "Senior Full Stack Engineer";

pub const SAMPLE_JD: &str = "We are hiring for a Senior Full Stack Engineer position!

Required Skills:
- 5+ years of experience in full-stack development
- Proficiency in JavaScript, TypeScript, and Python
- Strong knowledge of React, Next.js, and Node.js
- Experience with REST APIs and GraphQL
- PostgreSQL and MongoDB database design
- AWS and Docker expertise
- CI/CD pipeline implementation

Nice to Have:
- System Design and Architecture
- Machine Learning basics
- Kubernetes experience
- Data Structures and Algorithms mastery
- Git and Linux proficiency

Responsibilities:
- Design and implement scalable backend services
- Develop responsive React frontends
- Optimize database queries and performance
- Mentor junior developers on DSA and OOP concepts
- Lead technical interviews and code reviews

About the role:
This is a key position in our engineering team. You will work on critical systems handling millions of requests daily. Experience with networking concepts, OS fundamentals, and system design is crucial.";

pub fn sample_request() -> AnalysisRequest {
    AnalysisRequest::new(SAMPLE_JD, SAMPLE_COMPANY, SAMPLE_ROLE)
}
