//! Project case-study records.
//!
//! Declaration order matters: directory listings, `list.txt`, and
//! numeric `project <n>` lookups all follow it.

/// One step of a project timeline, from baseline to outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub label: &'static str,
    pub snapshot: &'static str,
    pub note: &'static str,
    pub metric_delta: &'static str,
}

/// A project case study, surfaced as `/projects/<id>.md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub domain: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub stack: &'static [&'static str],
    pub challenge: &'static str,
    pub headline_metric: &'static str,
    pub strengths: &'static [&'static str],
    pub growth_edge: &'static str,
    pub phases: &'static [Phase],
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "supplier-quotation-rag-pipeline",
        title: "Multi-Agent Supplier Quotation Processing Pipeline",
        domain: "RAG AI Systems",
        role: "AI/Backend Engineer",
        duration: "AI engineering project",
        stack: &["Python", "FastAPI", "Vector Embeddings", "FAISS", "Docker"],
        challenge: "Convert unstructured supplier quotations into structured, decision-ready data with intelligent retrieval.",
        headline_metric: "Built semantic retrieval with embeddings + FAISS and reproducible FastAPI Docker deployment.",
        strengths: &[
            "RAG-style semantic retrieval design",
            "Multi-agent processing pipeline orchestration",
            "Backend API and deployment reliability",
        ],
        growth_edge: "Add stronger citation tracing and evaluation benchmarks for response confidence.",
        phases: &[
            Phase {
                label: "Baseline",
                snapshot: "Supplier quotes were mostly unstructured and hard to compare quickly.",
                note: "Decision workflows were manual and inconsistent.",
                metric_delta: "processing latency high",
            },
            Phase {
                label: "Symptom",
                snapshot: "Keyword search missed context and reduced retrieval quality.",
                note: "Relevant quotations were difficult to rank correctly.",
                metric_delta: "retrieval precision gap",
            },
            Phase {
                label: "Hypothesis",
                snapshot: "Semantic embeddings + FAISS could improve contextual retrieval.",
                note: "Designed multi-stage pipeline for ingest, structure, and retrieval.",
                metric_delta: "RAG path selected",
            },
            Phase {
                label: "Intervention",
                snapshot: "Implemented semantic retrieval and backend services in FastAPI.",
                note: "Containerized deployment with Docker for reproducibility.",
                metric_delta: "pipeline operational",
            },
            Phase {
                label: "Outcome",
                snapshot: "Automated evaluation workflow standardized supplier comparison.",
                note: "Teams could search and compare quotes with stronger context relevance.",
                metric_delta: "decision workflow accelerated",
            },
        ],
    },
    Project {
        id: "personalized-nutrition-advisor",
        title: "Personalized Nutrition Advisor",
        domain: "Applied ML",
        role: "ML Engineer + API/Frontend Integrator",
        duration: "Mini project (team of 4)",
        stack: &["Python", "Scikit-learn", "FastAPI", "Streamlit", "Docker"],
        challenge: "Build personalized diet recommendations that move beyond generic plans and remain easy to use for everyday users.",
        headline_metric: "Delivered a full content-based recommendation pipeline with reproducible Docker deployment.",
        strengths: &[
            "Recommendation modeling with nearest neighbors",
            "End-to-end ML delivery (model + API + UI)",
            "Containerized collaboration and portability",
        ],
        growth_edge: "Extend recommendation quality with nutrition constraints and user feedback loops.",
        phases: &[
            Phase {
                label: "Baseline",
                snapshot: "Static diet suggestions without personalization depth.",
                note: "Initial recommendations were broad and generic.",
                metric_delta: "personal relevance: low",
            },
            Phase {
                label: "Symptom",
                snapshot: "Users with different profiles got similar outputs.",
                note: "One-size-fits-all logic reduced usefulness.",
                metric_delta: "personal fit gap observed",
            },
            Phase {
                label: "Hypothesis",
                snapshot: "Content-based nearest-neighbor approach could improve relevance.",
                note: "Feature similarity modeling was selected for explainability and speed.",
                metric_delta: "candidate approach selected",
            },
            Phase {
                label: "Intervention",
                snapshot: "Implemented model + FastAPI backend + Streamlit frontend.",
                note: "Added Docker workflow so teammates could run identical environments.",
                metric_delta: "end-to-end system ready",
            },
            Phase {
                label: "Outcome",
                snapshot: "Functional personalized nutrition advisor delivered.",
                note: "Project became easier to demo and share across machines.",
                metric_delta: "deployment friction reduced",
            },
        ],
    },
    Project {
        id: "face-attendance-tracker",
        title: "Face Identification for Attendance Tracking",
        domain: "Computer Vision",
        role: "Data and model pipeline contributor",
        duration: "Hackathon build",
        stack: &["Python", "TensorFlow", "OpenCV", "HOG", "CNN"],
        challenge: "Create a robust attendance tracker that can identify faces reliably under practical classroom conditions.",
        headline_metric: "Built a working face-attendance prototype with augmentation-enhanced generalization.",
        strengths: &[
            "Data augmentation strategy",
            "Face detection and preprocessing",
            "CNN-based identification pipeline",
        ],
        growth_edge: "Improve low-light and occlusion handling for more production-ready accuracy.",
        phases: &[
            Phase {
                label: "Baseline",
                snapshot: "Simple recognition trials with limited raw images.",
                note: "Model reliability was unstable with small data diversity.",
                metric_delta: "generalization weak",
            },
            Phase {
                label: "Symptom",
                snapshot: "Model performance dropped with angle/lighting changes.",
                note: "Face detection and training data variance were not robust enough.",
                metric_delta: "false predictions increased",
            },
            Phase {
                label: "Hypothesis",
                snapshot: "HOG detection + stronger augmentation could stabilize learning.",
                note: "Combined feature extraction and data diversity plan.",
                metric_delta: "pipeline redesign planned",
            },
            Phase {
                label: "Intervention",
                snapshot: "Integrated HOG face detection and trained CNN with augmented data.",
                note: "Reworked preprocessing and model training sequence.",
                metric_delta: "robustness improved",
            },
            Phase {
                label: "Outcome",
                snapshot: "Attendance tracking app functioned reliably for demo scenarios.",
                note: "System moved from concept to practical prototype.",
                metric_delta: "prototype validated",
            },
        ],
    },
    Project {
        id: "medicult-ambulance-booking",
        title: "Medicult - Smart Ambulance Booking App",
        domain: "Mobile Emergency Tech",
        role: "Android builder + anomaly-trigger workflow contributor",
        duration: "HackFest 2022 (36 hours)",
        stack: &["Android Studio", "Java", "Firebase", "Arduino", "Python", "GPS"],
        challenge: "Design an emergency booking system that can dispatch the nearest ambulance and react to persistent abnormal heart-rate events.",
        headline_metric: "Shortlisted Top 25 at HackFest 2022 with a wearable-linked emergency dispatch prototype.",
        strengths: &[
            "Rapid mobile prototyping under hackathon pressure",
            "Hardware + software integration",
            "Real-time emergency flow design",
        ],
        growth_edge: "Enhance medical false-positive handling and dispatch prioritization logic.",
        phases: &[
            Phase {
                label: "Baseline",
                snapshot: "Basic ambulance booking app concept.",
                note: "Needed to move beyond manual request flow.",
                metric_delta: "no proactive trigger",
            },
            Phase {
                label: "Symptom",
                snapshot: "Manual-only emergency triggers were too slow for critical cases.",
                note: "Automated detection path became essential.",
                metric_delta: "response risk identified",
            },
            Phase {
                label: "Hypothesis",
                snapshot: "Wearable heartbeat anomalies can trigger automatic dispatch.",
                note: "Linked Arduino signal logic to app-side event workflow.",
                metric_delta: "automation path defined",
            },
            Phase {
                label: "Intervention",
                snapshot: "Built Android + Firebase app with GPS nearest-ambulance routing.",
                note: "Implemented abnormal-heartbeat detection bridge with Python logic.",
                metric_delta: "auto-dispatch working",
            },
            Phase {
                label: "Outcome",
                snapshot: "Demonstrated integrated rescue workflow in national hackathon.",
                note: "Team reached final shortlist stage with strong practical framing.",
                metric_delta: "Top 25 shortlist",
            },
        ],
    },
    Project {
        id: "linguarails-smart-yatra",
        title: "LinguaRails: Smart Yatra",
        domain: "Multilingual Speech AI",
        role: "ML pipeline engineer",
        duration: "Railway AI solution build",
        stack: &["Transformer", "SeamlessM4T", "PyTorch", "Diffusers", "Flask"],
        challenge: "Reduce language barriers in railway contexts by combining multilingual speech recognition, translation, and language identification.",
        headline_metric: "Built a unified multilingual speech pipeline with quality filtering and data-alignment automation.",
        strengths: &[
            "Large-model pipeline composition",
            "Multilingual speech processing",
            "Data generation under label scarcity",
        ],
        growth_edge: "Improve real-time latency and edge deployment readiness for field conditions.",
        phases: &[
            Phase {
                label: "Baseline",
                snapshot: "Fragmented speech tools with no unified multilingual pipeline.",
                note: "End users faced inconsistent communication quality.",
                metric_delta: "workflow fragmented",
            },
            Phase {
                label: "Symptom",
                snapshot: "Transcript quality and language mismatch reduced reliability.",
                note: "Insufficient filtering and supervision quality created noise.",
                metric_delta: "quality instability",
            },
            Phase {
                label: "Hypothesis",
                snapshot: "A master model pipeline can unify recognition + translation + ID.",
                note: "Encoder-decoder transformer flow selected as core.",
                metric_delta: "unified architecture chosen",
            },
            Phase {
                label: "Intervention",
                snapshot: "Implemented processing pipeline with automated transcript filtering.",
                note: "Added aligned speech-data generation for low-resource settings.",
                metric_delta: "data quality uplift",
            },
            Phase {
                label: "Outcome",
                snapshot: "Inclusive multilingual communication prototype for railway use.",
                note: "System addressed both model quality and sustainability concerns.",
                metric_delta: "end-to-end pipeline delivered",
            },
        ],
    },
    Project {
        id: "distributed-traffic-booking",
        title: "Traffic Booking Platform",
        domain: "Distributed Systems",
        role: "Full-Stack + Platform Engineer",
        duration: "16 weeks",
        stack: &["Node.js", "Redis", "CockroachDB", "Docker"],
        challenge: "Prevent double-booking during traffic spikes.",
        headline_metric: "99.9% uptime, sub-second average response",
        strengths: &["Reliability under load", "Data consistency", "Infra pragmatism"],
        growth_edge: "Deeper multi-region tracing across all services.",
        phases: &[
            Phase {
                label: "Baseline",
                snapshot: "Single-region APIs with periodic slow queries.",
                note: "Initial architecture worked for low concurrency.",
                metric_delta: "p95 latency 840ms",
            },
            Phase {
                label: "Symptom",
                snapshot: "Traffic spikes caused queue buildup and write conflicts.",
                note: "Booking collisions surfaced during peak windows.",
                metric_delta: "error rate 4.2%",
            },
            Phase {
                label: "Hypothesis",
                snapshot: "Contention hotspots in transaction path and cache misses.",
                note: "Modelled contention and split read/write flows.",
                metric_delta: "cache miss 37%",
            },
            Phase {
                label: "Intervention",
                snapshot: "Introduced idempotent booking tokens and Redis-assisted locking.",
                note: "Refactored booking workflow with strict transaction boundaries.",
                metric_delta: "error rate 0.9%",
            },
            Phase {
                label: "Outcome",
                snapshot: "Stable throughput across high-traffic events.",
                note: "Platform became resilient for global rollouts.",
                metric_delta: "p95 latency 310ms",
            },
        ],
    },
    Project {
        id: "visionary-ai",
        title: "Visionary AI",
        domain: "Generative AI",
        role: "ML Engineer",
        duration: "10 weeks",
        stack: &["Python", "TensorFlow", "Streamlit"],
        challenge: "Generate useful video content with minimal manual editing.",
        headline_metric: "Reduced content production time by 60%",
        strengths: &["Model-product integration", "Rapid iteration", "UX for AI tools"],
        growth_edge: "Production-grade model evaluation harness.",
        phases: &[
            Phase {
                label: "Baseline",
                snapshot: "Script-based prototype converted text to rough scenes.",
                note: "Output quality was inconsistent.",
                metric_delta: "manual edits ~45 min/video",
            },
            Phase {
                label: "Symptom",
                snapshot: "Audio desync and context drift across scenes.",
                note: "Users dropped outputs after first pass.",
                metric_delta: "user completion 41%",
            },
            Phase {
                label: "Hypothesis",
                snapshot: "Prompt structure lacked continuity controls.",
                note: "Introduced context memory and scene constraints.",
                metric_delta: "coherence +18%",
            },
            Phase {
                label: "Intervention",
                snapshot: "Refined generation pipeline with staged validation.",
                note: "Built quality gates before final render.",
                metric_delta: "retry rate -35%",
            },
            Phase {
                label: "Outcome",
                snapshot: "Reliable one-click workflow for content teams.",
                note: "Significantly faster first usable cut.",
                metric_delta: "manual edits ~18 min/video",
            },
        ],
    },
    Project {
        id: "pssqfl",
        title: "Quantum Fed Learning",
        domain: "Quantum ML Research",
        role: "Research Engineer",
        duration: "Dissertation project",
        stack: &["Python", "PennyLane", "TensorFlow", "PyTorch"],
        challenge: "Train healthcare models collaboratively without raw data exchange.",
        headline_metric: "Research publication + strong privacy-preserving accuracy",
        strengths: &["Research depth", "Experimental rigor", "Applied ML thinking"],
        growth_edge: "Faster experimental orchestration tooling.",
        phases: &[
            Phase {
                label: "Baseline",
                snapshot: "Classical federated setup used as benchmark.",
                note: "Needed stronger privacy guarantees.",
                metric_delta: "baseline F1 0.78",
            },
            Phase {
                label: "Symptom",
                snapshot: "Privacy methods degraded model quality too sharply.",
                note: "Clinical utility dropped below acceptable threshold.",
                metric_delta: "F1 0.69",
            },
            Phase {
                label: "Hypothesis",
                snapshot: "Hybrid quantum feature encoding could recover lost signal.",
                note: "Designed constrained experimental matrix.",
                metric_delta: "privacy preserved",
            },
            Phase {
                label: "Intervention",
                snapshot: "Built PSSQFL training loop with tuned aggregation.",
                note: "Balanced privacy objectives with convergence behavior.",
                metric_delta: "F1 0.81",
            },
            Phase {
                label: "Outcome",
                snapshot: "Publishable framework with better tradeoff profile.",
                note: "Method demonstrated practical potential for healthcare collaboration.",
                metric_delta: "paper published",
            },
        ],
    },
];
